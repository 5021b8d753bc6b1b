//! Error taxonomy of the LFC evaluation.

use lfcconsts::*;
use std::fmt;

/// Failures of an LFC evaluation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LfcError {
    /// The fitted coefficient table does not have the required shape.
    #[error("invalid coefficient vector: expected {expected} entries, got {got}")]
    InvalidCoefficients { expected: usize, got: usize },

    /// A batch given as a flat row-major array is not a multiple of [x, rs, theta].
    #[error("batch of {len} values is not a whole number of [x, rs, theta] rows")]
    RaggedBatch { len: usize },

    /// Arrays of one batch differ in length.
    #[error("batch length mismatch: expected {expected} entries, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    /// Intermediate rational terms produced Inf or NaN.
    #[error("non-finite LFC at x = {x}, rs = {rs}, theta = {theta}")]
    NumericOverflow { x: f64, rs: f64, theta: f64 },

    /// Input outside the validity window, raised only when a caller asks
    /// for strict checking.
    #[error("{0}")]
    Domain(DomainWarning),
}

/// Fails unless a batch array of length `got` matches the `expected` length.
#[inline]
pub fn check_batch_len(expected: usize, got: usize) -> Result<(), LfcError> {
    if expected == got {
        Ok(())
    } else {
        Err(LfcError::LengthMismatch { expected, got })
    }
}

impl From<DomainWarning> for LfcError {
    fn from(w: DomainWarning) -> Self {
        LfcError::Domain(w)
    }
}

/// An input outside the window the parametrization was fitted on. The
/// result is still defined but physically unreliable.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DomainWarning {
    XOutOfRange(f64),
    RsOutOfRange(f64),
    ThetaOutOfRange(f64),
}

impl fmt::Display for DomainWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainWarning::XOutOfRange(x) => {
                write!(f, "x = {} outside [{}, {}]", x, X_MIN, X_MAX)
            }
            DomainWarning::RsOutOfRange(rs) => {
                write!(f, "rs = {} outside [{}, {}]", rs, RS_MIN, RS_MAX)
            }
            DomainWarning::ThetaOutOfRange(theta) => {
                write!(f, "theta = {} outside [{}, {}]", theta, THETA_MIN, THETA_MAX)
            }
        }
    }
}
