//! Capabilities injected into the LFC evaluation.

/// Prefactor A(rs, theta) of the compressibility sum rule, G(x) ≈ A·x² for
/// x → 0. Supplied by whichever module owns the exchange-correlation free
/// energy.
///
/// Implementations should be stateless and thread-safe.
pub trait CsrPrefactor: Send + Sync {
    fn prefactor(&self, rs: f64, theta: f64) -> f64;
}

impl<F> CsrPrefactor for F
where
    F: Fn(f64, f64) -> f64 + Send + Sync,
{
    #[inline]
    fn prefactor(&self, rs: f64, theta: f64) -> f64 {
        self(rs, theta)
    }
}

/// A static local-field correction G(x, rs, theta) with x = q/qF.
///
/// This is the seam for the learned model as well as for the analytical
/// surrogate. Implementations should be stateless and thread-safe.
pub trait StaticLfc: Send + Sync {
    fn static_lfc(&self, x: f64, rs: f64, theta: f64) -> f64;
}

impl<F> StaticLfc for F
where
    F: Fn(f64, f64, f64) -> f64 + Send + Sync,
{
    #[inline]
    fn static_lfc(&self, x: f64, rs: f64, theta: f64) -> f64 {
        self(x, rs, theta)
    }
}
