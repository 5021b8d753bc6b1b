//! Rational parametrization of the shape coefficients (alpha, beta, gamma, delta)
//! of the analytical static LFC.
//!
//! Every shape coefficient P is evaluated in two stages from its own nine
//! fitted numbers:
//!
//! * theta stage, three times: s_k = a_k + b_k·t + c_k·t^1.5
//! * rs stage: P = (s_0 + s_1·rs) / (1 + s_2·rs)

mod coefficients;
pub use coefficients::*;

use lfcconsts::*;
use lfctypes::*;
use rayon::prelude::*;

/// The four shape coefficients, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeParameter {
    Alpha,
    Beta,
    Gamma,
    Delta,
}

impl ShapeParameter {
    pub const ALL: [ShapeParameter; N_SHAPE_PARAMETERS] = [
        ShapeParameter::Alpha,
        ShapeParameter::Beta,
        ShapeParameter::Gamma,
        ShapeParameter::Delta,
    ];

    /// Position of this parameter's block in the coefficient table
    pub fn index(&self) -> usize {
        match self {
            ShapeParameter::Alpha => 0,
            ShapeParameter::Beta => 1,
            ShapeParameter::Gamma => 2,
            ShapeParameter::Delta => 3,
        }
    }
}

/// theta stage: a + b·t + c·t^1.5
#[inline]
pub fn theta_stage(t: f64, a: f64, b: f64, c: f64) -> f64 {
    a + b * t + c * t.powf(1.5)
}

/// rs stage: (a + b·rs) / (1 + c·rs)
#[inline]
pub fn rs_stage(rs: f64, a: f64, b: f64, c: f64) -> f64 {
    (a + b * rs) / (1.0 + c * rs)
}

/// One shape coefficient from its nine-entry block.
#[inline]
fn eval_block(block: &[f64], rs: f64, theta: f64) -> f64 {
    debug_assert_eq!(block.len(), N_COEFFICIENTS_PER_PARAMETER);

    let mut s = [0.0; N_SUBGROUPS];

    for (k, abc) in block.chunks_exact(N_SUBGROUP_COEFFICIENTS).enumerate() {
        s[k] = theta_stage(theta, abc[0], abc[1], abc[2]);
    }

    rs_stage(rs, s[0], s[1], s[2])
}

impl CoefficientVector {
    /// Value of a single shape coefficient at (rs, theta).
    pub fn evaluate(&self, which: ShapeParameter, rs: f64, theta: f64) -> f64 {
        eval_block(self.block(which.index()), rs, theta)
    }
}

/// (alpha, beta, gamma, delta) at (rs, theta).
pub fn derive_shape_parameters(rs: f64, theta: f64, coeffs: &CoefficientVector) -> ShapeParameters {
    ShapeParameters::new(
        coeffs.evaluate(ShapeParameter::Alpha, rs, theta),
        coeffs.evaluate(ShapeParameter::Beta, rs, theta),
        coeffs.evaluate(ShapeParameter::Gamma, rs, theta),
        coeffs.evaluate(ShapeParameter::Delta, rs, theta),
    )
}

/// Same as [`derive_shape_parameters`] for an unvalidated table; the length
/// is checked before any arithmetic.
pub fn derive_shape_parameters_from_slice(
    rs: f64,
    theta: f64,
    coeffs: &[f64],
) -> Result<ShapeParameters, LfcError> {
    let coeffs = CoefficientVector::try_from(coeffs)?;
    Ok(derive_shape_parameters(rs, theta, &coeffs))
}

/// Shape coefficients for every (rs, theta) pair of a batch; `rs` and
/// `theta` must have the same length.
pub fn derive_shape_parameters_batch(
    rs: &[f64],
    theta: &[f64],
    coeffs: &CoefficientVector,
) -> Result<Vec<ShapeParameters>, LfcError> {
    check_batch_len(rs.len(), theta.len())?;

    let shapes = if rs.len() >= PARALLEL_MIN_LEN && rayon::current_num_threads() > 1 {
        rs.par_iter()
            .zip(theta.par_iter())
            .map(|(&r, &t)| derive_shape_parameters(r, t, coeffs))
            .collect()
    } else {
        rs.iter()
            .zip(theta.iter())
            .map(|(&r, &t)| derive_shape_parameters(r, t, coeffs))
            .collect()
    };

    Ok(shapes)
}
