use crate::{DomainWarning, LfcError};
use lfcconsts::*;

/// One evaluation point (x = q/qF, rs, theta).
///
/// The layout is `#[repr(C)]` so that a slice of points is a row-major
/// `[n, 3]` array with columns `[x, rs, theta]`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct PhysicalPoint {
    pub x: f64,
    pub rs: f64,
    pub theta: f64,
}

impl PhysicalPoint {
    #[inline]
    pub fn new(x: f64, rs: f64, theta: f64) -> Self {
        PhysicalPoint { x, rs, theta }
    }

    /// Every way this point leaves the fitted window; empty when it is inside.
    pub fn check_domain(&self) -> Vec<DomainWarning> {
        let mut warnings = Vec::new();

        if !(X_MIN..=X_MAX).contains(&self.x) {
            warnings.push(DomainWarning::XOutOfRange(self.x));
        }

        if !(RS_MIN..=RS_MAX).contains(&self.rs) {
            warnings.push(DomainWarning::RsOutOfRange(self.rs));
        }

        if !(THETA_MIN..=THETA_MAX).contains(&self.theta) {
            warnings.push(DomainWarning::ThetaOutOfRange(self.theta));
        }

        warnings
    }

    /// Logs every domain warning of this point and returns how many there were.
    pub fn warn_domain(&self) -> usize {
        let warnings = self.check_domain();

        for w in warnings.iter() {
            tracing::warn!(x = self.x, rs = self.rs, theta = self.theta, "{}", w);
        }

        warnings.len()
    }

    /// Strict variant: the first domain warning becomes an error.
    pub fn require_domain(&self) -> Result<(), LfcError> {
        match self.check_domain().into_iter().next() {
            Some(w) => Err(w.into()),
            None => Ok(()),
        }
    }
}

/// Reads a flat row-major `[x, rs, theta, x, rs, theta, ...]` array.
pub fn points_from_rows(rows: &[f64]) -> Result<Vec<PhysicalPoint>, LfcError> {
    if rows.len() % 3 != 0 {
        return Err(LfcError::RaggedBatch { len: rows.len() });
    }

    Ok(rows
        .chunks_exact(3)
        .map(|r| PhysicalPoint::new(r[0], r[1], r[2]))
        .collect())
}

/// Views a batch of points as its row-major `[n, 3]` array.
pub fn as_slice_of_element(v: &[PhysicalPoint]) -> &[f64] {
    unsafe { std::slice::from_raw_parts(v.as_ptr() as *const f64, v.len() * 3) }
}
