//! Effective static approximation (ESA) of the static local-field correction
//! of the warm dense electron gas.
//!
//! G_ESA(x) = A(x)·G_∞ + (1 - A(x))·G_static(x)
//!
//! where G_static is either a learned model or the analytical surrogate,
//! G_∞ = 1 - g(0)/2 is the exact large-wavenumber limit and A is the tanh
//! activation centered at x_m.

mod analytical;
pub use analytical::*;

mod policy;
pub use policy::*;

mod scheme;
pub use scheme::*;

pub use activation::{activation, x_m, ActivationParams, TransitionCenter};
pub use lfctypes::*;
pub use ontop::{g_infinity, on_top_pdf, OnTopParams, SPINK_BROWN};
pub use shape::{derive_shape_parameters, CoefficientVector, ESA_ABCD};
pub use surface::{surface_value, AnalyticalSurface, CsrPrefactor, StaticLfc};

use ontop::g_infinity_with;

/// Blends `source` with the large-wavenumber limit at (x, rs, theta) for an
/// explicit g(0) table.
#[inline]
pub fn combine_with<S: StaticLfc + ?Sized>(
    on_top: &OnTopParams,
    x: f64,
    rs: f64,
    theta: f64,
    xm: f64,
    eta: f64,
    source: &S,
) -> f64 {
    let ginfty = g_infinity_with(on_top, rs, theta);
    let g_static = source.static_lfc(x, rs, theta);
    let a = activation(x, xm, eta);

    a * ginfty + (1.0 - a) * g_static
}

/// G_ESA at (x, rs, theta) with caller-supplied transition center and width.
#[inline]
pub fn combine<S: StaticLfc + ?Sized>(
    x: f64,
    rs: f64,
    theta: f64,
    xm: f64,
    eta: f64,
    source: &S,
) -> f64 {
    combine_with(&SPINK_BROWN, x, rs, theta, xm, eta, source)
}

/// G_ESA with a learned model queried under an explicit policy.
pub fn neural_esa<M: StaticLfc>(
    model: M,
    policy: QueryPolicy,
    xm: f64,
    eta: f64,
) -> EsaScheme<NeuralLfc<M>> {
    EsaScheme::new(NeuralLfc::new(model, policy), ActivationParams::fixed(xm, eta))
}
