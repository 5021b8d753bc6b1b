//! Value types shared by every crate of the ESA workspace.

mod error;
pub use error::*;

mod point;
pub use point::*;

use lfcconsts::*;

/// Fermi wavenumber of the unpolarized electron gas, qf = (9π/4)^(1/3) / rs.
#[inline]
pub fn qf(rs: f64) -> f64 {
    NINEPI_OVER_FOUR.cbrt() / rs
}

/// Reduced wavenumber x = q / qf(rs).
#[inline]
pub fn x_of_q(q: f64, rs: f64) -> f64 {
    q / qf(rs)
}

/// The four shape coefficients of the q-dependence of the analytical LFC.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct ShapeParameters {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
    pub delta: f64,
}

impl ShapeParameters {
    #[inline]
    pub fn new(alpha: f64, beta: f64, gamma: f64, delta: f64) -> Self {
        ShapeParameters {
            alpha,
            beta,
            gamma,
            delta,
        }
    }
}
