//! Query policy of the learned static LFC.

use lfcconsts::*;
use surface::StaticLfc;

/// How x is passed to the learned model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryPolicy {
    /// x > 5 is evaluated at x = 5, the edge of the training window
    Clamped,
    /// x is passed through unchanged
    Unclamped,
}

impl QueryPolicy {
    pub fn from_str(policy: &str) -> Option<Self> {
        match policy {
            "clamped" => Some(QueryPolicy::Clamped),
            "unclamped" => Some(QueryPolicy::Unclamped),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryPolicy::Clamped => "clamped",
            QueryPolicy::Unclamped => "unclamped",
        }
    }

    #[inline]
    pub fn query_x(&self, x: f64) -> f64 {
        match self {
            QueryPolicy::Clamped if x > NEURAL_X_MAX => NEURAL_X_MAX,
            _ => x,
        }
    }
}

/// A learned static LFC together with the policy it is queried under.
///
/// The model itself is opaque: anything mapping (x, rs, theta) to G.
#[derive(Debug, Clone)]
pub struct NeuralLfc<M: StaticLfc> {
    model: M,
    policy: QueryPolicy,
}

impl<M: StaticLfc> NeuralLfc<M> {
    pub fn new(model: M, policy: QueryPolicy) -> Self {
        NeuralLfc { model, policy }
    }

    pub fn policy(&self) -> QueryPolicy {
        self.policy
    }

    pub fn model(&self) -> &M {
        &self.model
    }
}

impl<M: StaticLfc> StaticLfc for NeuralLfc<M> {
    #[inline]
    fn static_lfc(&self, x: f64, rs: f64, theta: f64) -> f64 {
        self.model.static_lfc(self.policy.query_x(x), rs, theta)
    }
}
