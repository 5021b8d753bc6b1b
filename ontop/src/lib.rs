//! On-top pair distribution function g(0) of the warm dense electron gas
//!
//! Padé-type parametrization in rs whose coefficients are rational functions
//! of the reduced temperature theta. The theta = 0 limit is the ground-state
//! fit of Spink et al. [Phys. Rev. B 88, 085121 (2013)]; the finite-theta
//! corrections are fitted to the restricted PIMC data of Brown et al.
//! [PRL 110, 146405 (2013)].
//!
//! g(0) = (1 + f_a(t)·√rs + f_b(t)·rs) / (1 + f_c(t)·rs + f_d(t)·rs³)

use itertools::multizip;
use lfctypes::{check_batch_len, LfcError};

/// Ground-state and finite-temperature fit coefficients of g(0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OnTopParams {
    /// Ground-state limits of f_a, f_b, f_c, f_d
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    /// f_a(t) = (a + alpha_1_a·t) / (1 + beta_1_a·t + beta_2_a·t³)
    pub alpha_1_a: f64,
    pub beta_1_a: f64,
    pub beta_2_a: f64,
    /// f_b(t) = (b + alpha_1_b·√t) / (1 + beta_1_b·t + beta_2_b·t²)
    pub alpha_1_b: f64,
    pub beta_1_b: f64,
    pub beta_2_b: f64,
    /// f_c(t) = (c + alpha_1_c·√t + alpha_2_c·t·√t) / (1 + beta_1_c·t + beta_2_c·t²)
    pub alpha_1_c: f64,
    pub alpha_2_c: f64,
    pub beta_1_c: f64,
    pub beta_2_c: f64,
    /// f_d(t) = (d + alpha_1_d·√t) / (1 + beta_1_d·t + beta_2_d·t²)
    pub alpha_1_d: f64,
    pub beta_1_d: f64,
    pub beta_2_d: f64,
}

/// Spink ground state combined with the Brown finite-temperature corrections
pub const SPINK_BROWN: OnTopParams = OnTopParams {
    a: 0.18315,
    b: -0.0784043,
    c: 1.02232,
    d: 0.0837741,
    alpha_1_a: 18.4377,
    beta_1_a: 24.1339,
    beta_2_a: 1.86499,
    alpha_1_b: -0.24368,
    beta_1_b: 0.252577,
    beta_2_b: 0.127043,
    alpha_1_c: 2.23663,
    alpha_2_c: 0.448937,
    beta_1_c: 0.445526,
    beta_2_c: 0.408504,
    alpha_1_d: 0.0589015,
    beta_1_d: -0.598508,
    beta_2_d: 0.513162,
};

impl Default for OnTopParams {
    fn default() -> Self {
        SPINK_BROWN
    }
}

impl OnTopParams {
    #[inline]
    pub fn f_a(&self, t: f64) -> f64 {
        (self.a + self.alpha_1_a * t) / (1.0 + t * self.beta_1_a + t * t * t * self.beta_2_a)
    }

    #[inline]
    pub fn f_b(&self, t: f64) -> f64 {
        (self.b + self.alpha_1_b * t.sqrt()) / (1.0 + t * self.beta_1_b + t * t * self.beta_2_b)
    }

    #[inline]
    pub fn f_c(&self, t: f64) -> f64 {
        let st = t.sqrt();
        (self.c + self.alpha_1_c * st + self.alpha_2_c * t * st)
            / (1.0 + t * self.beta_1_c + t * t * self.beta_2_c)
    }

    #[inline]
    pub fn f_d(&self, t: f64) -> f64 {
        (self.d + self.alpha_1_d * t.sqrt()) / (1.0 + t * self.beta_1_d + t * t * self.beta_2_d)
    }
}

/// g(0) at (rs, theta) for the given coefficient table.
///
/// No range checks: rs < 0 or theta < 0 give NaN through the square roots.
#[inline]
pub fn on_top_pdf_with(params: &OnTopParams, rs: f64, theta: f64) -> f64 {
    let t = theta;

    let num = 1.0 + params.f_a(t) * rs.sqrt() + params.f_b(t) * rs;
    let den = 1.0 + params.f_c(t) * rs + params.f_d(t) * rs * rs * rs;

    num / den
}

/// g(0) at (rs, theta) with the Spink/Brown coefficients
#[inline]
pub fn on_top_pdf(rs: f64, theta: f64) -> f64 {
    on_top_pdf_with(&SPINK_BROWN, rs, theta)
}

/// Large-wavenumber limit of a static LFC, G(x → ∞) = 1 - g(0)/2.
///
/// Only the opposite-spin part of g(0) survives a short-wavelength probe,
/// hence the factor one half.
#[inline]
pub fn g_infinity_with(params: &OnTopParams, rs: f64, theta: f64) -> f64 {
    1.0 - 0.5 * on_top_pdf_with(params, rs, theta)
}

#[inline]
pub fn g_infinity(rs: f64, theta: f64) -> f64 {
    g_infinity_with(&SPINK_BROWN, rs, theta)
}

/// Elementwise g(0) over equal-length rs, theta and output arrays.
pub fn on_top_pdf_batch(
    params: &OnTopParams,
    rs: &[f64],
    theta: &[f64],
    g0: &mut [f64],
) -> Result<(), LfcError> {
    check_batch_len(rs.len(), theta.len())?;
    check_batch_len(rs.len(), g0.len())?;

    for (g, &r, &t) in multizip((g0.iter_mut(), rs.iter(), theta.iter())) {
        *g = on_top_pdf_with(params, r, t);
    }

    Ok(())
}
