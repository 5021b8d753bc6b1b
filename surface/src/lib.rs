//! Analytical surrogate of the static LFC at small and intermediate x.
//!
//! G(x) = A·x²·(1 + alpha·x + beta·√x) / (1 + gamma·x + delta·x^1.25 + A·x²)
//!
//! with A the compressibility-sum-rule prefactor. The surrogate is only
//! meaningful below the activation center; beyond it the ESA blend hands
//! over to the large-wavenumber limit.

pub mod traits;
pub use traits::*;

use itertools::multizip;
use lfctypes::*;
use shape::*;

/// Surrogate value for given shape coefficients and CSR prefactor.
#[inline]
pub fn surface_value_with_prefactor(x: f64, a: f64, shape: &ShapeParameters) -> f64 {
    let num = 1.0 + shape.alpha * x + shape.beta * x.sqrt();
    let den = 1.0 + shape.gamma * x + shape.delta * x.powf(1.25) + a * x * x;

    a * x * x * num / den
}

/// Surrogate value at (x, rs, theta).
#[inline]
pub fn surface_value<P: CsrPrefactor + ?Sized>(
    x: f64,
    rs: f64,
    theta: f64,
    shape: &ShapeParameters,
    csr: &P,
) -> f64 {
    surface_value_with_prefactor(x, csr.prefactor(rs, theta), shape)
}

/// The surrogate as a [`StaticLfc`]: shape coefficients are derived from the
/// coefficient table at every call.
#[derive(Debug, Clone)]
pub struct AnalyticalSurface<P: CsrPrefactor> {
    coeffs: CoefficientVector,
    csr: P,
}

impl<P: CsrPrefactor> AnalyticalSurface<P> {
    pub fn new(coeffs: CoefficientVector, csr: P) -> Self {
        AnalyticalSurface { coeffs, csr }
    }

    /// Surrogate with the reference coefficient table.
    pub fn with_reference_table(csr: P) -> Self {
        AnalyticalSurface::new(ESA_ABCD, csr)
    }

    pub fn coefficients(&self) -> &CoefficientVector {
        &self.coeffs
    }

    pub fn prefactor(&self) -> &P {
        &self.csr
    }

    pub fn shape_parameters(&self, rs: f64, theta: f64) -> ShapeParameters {
        derive_shape_parameters(rs, theta, &self.coeffs)
    }

    /// Surrogate values over a batch of points into a buffer of the same length.
    pub fn evaluate_batch(&self, points: &[PhysicalPoint], g: &mut [f64]) -> Result<(), LfcError> {
        check_batch_len(points.len(), g.len())?;

        for (g, p) in multizip((g.iter_mut(), points.iter())) {
            *g = self.static_lfc(p.x, p.rs, p.theta);
        }

        Ok(())
    }
}

impl<P: CsrPrefactor> StaticLfc for AnalyticalSurface<P> {
    fn static_lfc(&self, x: f64, rs: f64, theta: f64) -> f64 {
        let shape = self.shape_parameters(rs, theta);
        surface_value(x, rs, theta, &shape, &self.csr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lfcconsts::*;

    fn test_prefactor(rs: f64, theta: f64) -> f64 {
        0.5 / (1.0 + 0.1 * rs * theta)
    }

    fn assert_close(a: f64, b: f64) {
        assert!(((a - b) / b).abs() < EPS12, "{} vs {}", a, b);
    }

    #[test]
    fn test_surface_reference_values() {
        let cases = [
            (2.6, 10.0, 2.0, 3.3639706444097293),
            (1.0, 2.0, 1.0, 0.3565754441626864),
            (0.5, 6.0, 0.5, 0.09677439846588662),
        ];

        for (x, rs, theta, expected) in cases {
            let shape = derive_shape_parameters(rs, theta, &ESA_ABCD);
            assert_close(surface_value(x, rs, theta, &shape, &test_prefactor), expected);
        }
    }

    #[test]
    fn test_surface_small_x_follows_csr() {
        let shape = ShapeParameters::new(0.3, -0.2, 0.5, 0.1);
        let a = 0.8;
        let x = 1.0e-12;

        let g = surface_value_with_prefactor(x, a, &shape);
        assert!((g / (a * x * x) - 1.0).abs() < EPS6);
        assert_eq!(surface_value_with_prefactor(0.0, a, &shape), 0.0);
    }

    #[test]
    fn test_surface_zero_shape() {
        // with alpha = beta = gamma = delta = 0: G = A x² / (1 + A x²)
        let shape = ShapeParameters::default();
        let g = surface_value_with_prefactor(2.0, 0.25, &shape);
        assert!((g - 0.5).abs() < EPS14);
    }

    #[test]
    fn test_analytical_surface_source() {
        let surface = AnalyticalSurface::with_reference_table(test_prefactor);

        assert_eq!(surface.coefficients(), &ESA_ABCD);
        assert_eq!(surface.prefactor().prefactor(10.0, 2.0), 0.5 / 3.0);
        assert_close(surface.static_lfc(2.6, 10.0, 2.0), 3.3639706444097293);
    }

    #[test]
    fn test_analytical_surface_batch() {
        let surface = AnalyticalSurface::new(ESA_ABCD, |_rs: f64, _theta: f64| 0.3);
        let points = vec![
            PhysicalPoint::new(0.5, 1.0, 0.1),
            PhysicalPoint::new(1.5, 4.0, 1.0),
            PhysicalPoint::new(3.0, 10.0, 3.0),
        ];
        let mut g = vec![0.0; points.len()];

        surface.evaluate_batch(&points, &mut g).unwrap();

        for (gi, p) in g.iter().zip(points.iter()) {
            assert_eq!(*gi, surface.static_lfc(p.x, p.rs, p.theta));
        }
    }

    #[test]
    fn test_analytical_surface_batch_length_mismatch() {
        let surface = AnalyticalSurface::with_reference_table(test_prefactor);
        let points = vec![PhysicalPoint::new(2.6, 10.0, 2.0)];
        let mut g = vec![-999.0; 3];

        let err = surface.evaluate_batch(&points, &mut g).unwrap_err();

        assert_eq!(err, LfcError::LengthMismatch { expected: 1, got: 3 });
        assert_eq!(g, vec![-999.0; 3]);
    }
}
