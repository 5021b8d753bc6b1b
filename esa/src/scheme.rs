use crate::combine_with;
use activation::ActivationParams;
use itertools::multizip;
use lfcconsts::*;
use lfctypes::*;
use ontop::{OnTopParams, SPINK_BROWN};
use rayon::prelude::*;
use surface::StaticLfc;

/// A configured ESA: static-LFC source, activation and on-top table.
#[derive(Debug, Clone)]
pub struct EsaScheme<S: StaticLfc> {
    source: S,
    activation: ActivationParams,
    on_top: OnTopParams,
    check_domain: bool,
}

impl<S: StaticLfc> EsaScheme<S> {
    pub fn new(source: S, activation: ActivationParams) -> Self {
        EsaScheme {
            source,
            activation,
            on_top: SPINK_BROWN,
            check_domain: true,
        }
    }

    /// Replaces the g(0) coefficient table.
    pub fn with_on_top(mut self, on_top: OnTopParams) -> Self {
        self.on_top = on_top;
        self
    }

    /// Turns logging of points outside the fitted window on or off.
    pub fn with_domain_check(mut self, check_domain: bool) -> Self {
        self.check_domain = check_domain;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn activation(&self) -> &ActivationParams {
        &self.activation
    }

    pub fn on_top(&self) -> &OnTopParams {
        &self.on_top
    }

    /// G_ESA at (x, rs, theta). Non-finite intermediates propagate.
    #[inline]
    pub fn evaluate(&self, x: f64, rs: f64, theta: f64) -> f64 {
        let xm = self.activation.center.at(theta);
        combine_with(&self.on_top, x, rs, theta, xm, self.activation.eta, &self.source)
    }

    /// G_ESA at one point, logging domain warnings when enabled.
    pub fn evaluate_point(&self, p: &PhysicalPoint) -> f64 {
        if self.check_domain {
            p.warn_domain();
        }

        self.evaluate(p.x, p.rs, p.theta)
    }

    /// G_ESA at one point; a non-finite result is an error.
    pub fn evaluate_checked(&self, p: &PhysicalPoint) -> Result<f64, LfcError> {
        let g = self.evaluate_point(p);

        if g.is_finite() {
            Ok(g)
        } else {
            Err(LfcError::NumericOverflow {
                x: p.x,
                rs: p.rs,
                theta: p.theta,
            })
        }
    }

    /// G_ESA over a batch, index-aligned with `points`.
    pub fn evaluate_batch(&self, points: &[PhysicalPoint]) -> Vec<f64> {
        let mut g = vec![0.0; points.len()];
        self.fill_batch(points, &mut g);
        g
    }

    /// G_ESA over a batch into a caller-provided buffer; the buffer length
    /// must equal the number of points.
    pub fn evaluate_batch_into(
        &self,
        points: &[PhysicalPoint],
        g: &mut [f64],
    ) -> Result<(), LfcError> {
        check_batch_len(points.len(), g.len())?;
        self.fill_batch(points, g);
        Ok(())
    }

    // `g` and `points` have equal length
    fn fill_batch(&self, points: &[PhysicalPoint], g: &mut [f64]) {
        debug_assert_eq!(points.len(), g.len());

        if self.check_domain {
            let n_outside = points
                .iter()
                .filter(|p| !p.check_domain().is_empty())
                .count();

            if n_outside > 0 {
                tracing::warn!(
                    n_outside,
                    n_points = points.len(),
                    "points outside the fitted window"
                );
            }
        }

        let parallel = points.len() >= PARALLEL_MIN_LEN && rayon::current_num_threads() > 1;
        tracing::debug!(n_points = points.len(), parallel, "evaluating ESA batch");

        if parallel {
            g.par_iter_mut()
                .zip(points.par_iter())
                .for_each(|(g, p)| *g = self.evaluate(p.x, p.rs, p.theta));
        } else {
            for (g, p) in multizip((g.iter_mut(), points.iter())) {
                *g = self.evaluate(p.x, p.rs, p.theta);
            }
        }
    }
}
