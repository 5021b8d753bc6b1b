use std::f64;

// fermi wavenumber of the unpolarized electron gas: qf = (9π/4)^(1/3) / rs

pub const NINEPI_OVER_FOUR: f64 = 9.0 * 0.25 * f64::consts::PI;

// transition center of the activation, x_m(theta) = A + B*theta + C*theta^2

pub const XM_A: f64 = 2.64;
pub const XM_B: f64 = 0.31;
pub const XM_C: f64 = 0.08;

// transition width of the fully analytical ESA

pub const ETA_ANALYTICAL: f64 = 3.0;

// largest x = q/qF the learned static LFC was trained on

pub const NEURAL_X_MAX: f64 = 5.0;

// validity window of the learned model and of the analytical fit

pub const X_MIN: f64 = 0.0;
pub const X_MAX: f64 = 5.0;
pub const RS_MIN: f64 = 0.7;
pub const RS_MAX: f64 = 20.0;
pub const THETA_MIN: f64 = 0.0;
pub const THETA_MAX: f64 = 4.0;

// shape coefficient table layout

pub const N_SHAPE_PARAMETERS: usize = 4;
pub const N_SUBGROUPS: usize = 3;
pub const N_SUBGROUP_COEFFICIENTS: usize = 3;
pub const N_COEFFICIENTS_PER_PARAMETER: usize = N_SUBGROUPS * N_SUBGROUP_COEFFICIENTS;
pub const N_COEFFICIENTS: usize = N_SHAPE_PARAMETERS * N_COEFFICIENTS_PER_PARAMETER;

// batches shorter than this are evaluated serially

pub const PARALLEL_MIN_LEN: usize = 8192;

// numerical tolerances

pub const EPS6: f64 = 1E-6;
pub const EPS9: f64 = 1E-9;
pub const EPS12: f64 = 1E-12;
pub const EPS14: f64 = 1E-14;
