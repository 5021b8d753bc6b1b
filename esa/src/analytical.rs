//! Fully analytical ESA: the rational surrogate in place of the learned
//! model, x_m = x_m(theta), eta = 3 and no clamp on x.

use crate::EsaScheme;
use activation::ActivationParams;
use lfctypes::*;
use shape::{CoefficientVector, ESA_ABCD};
use surface::{AnalyticalSurface, CsrPrefactor};

pub type AnalyticalEsa<P> = EsaScheme<AnalyticalSurface<P>>;

/// Analytical ESA for a coefficient table and CSR prefactor.
pub fn analytical_esa<P: CsrPrefactor>(coeffs: CoefficientVector, csr: P) -> AnalyticalEsa<P> {
    EsaScheme::new(AnalyticalSurface::new(coeffs, csr), ActivationParams::analytical())
}

/// Analytical ESA with the reference coefficient table.
pub fn reference_esa<P: CsrPrefactor>(csr: P) -> AnalyticalEsa<P> {
    analytical_esa(ESA_ABCD, csr)
}

/// G_ESA over a batch for an unvalidated coefficient table. The table is
/// checked before any point is evaluated.
pub fn g_analytical<P: CsrPrefactor>(
    points: &[PhysicalPoint],
    coeffs: &[f64],
    csr: P,
) -> Result<Vec<f64>, LfcError> {
    let coeffs = CoefficientVector::try_from(coeffs)?;
    Ok(analytical_esa(coeffs, csr).evaluate_batch(points))
}
