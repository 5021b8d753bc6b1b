//! Smooth switch between the static and the large-wavenumber limit of the LFC.

use lfcconsts::*;

/// A(x) = (tanh(eta·(x - xm)) + 1) / 2
///
/// Increasing in x for eta > 0, 1/2 at x = xm. `tanh` saturates to ±1, so no
/// clamping is needed for large |eta·(x - xm)|.
#[inline]
pub fn activation(x: f64, xm: f64, eta: f64) -> f64 {
    0.5 * ((eta * (x - xm)).tanh() + 1.0)
}

/// Transition center x_m(theta) = 2.64 + 0.31·theta + 0.08·theta²
#[inline]
pub fn x_m(theta: f64) -> f64 {
    XM_A + XM_B * theta + XM_C * theta * theta
}

/// Where the activation is centered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionCenter {
    /// Caller-chosen x_m, the same at every temperature
    Fixed(f64),
    /// x_m(theta) of the analytical parametrization
    ThetaDependent,
}

impl TransitionCenter {
    #[inline]
    pub fn at(&self, theta: f64) -> f64 {
        match self {
            TransitionCenter::Fixed(xm) => *xm,
            TransitionCenter::ThetaDependent => x_m(theta),
        }
    }
}

/// Center and sharpness of the activation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivationParams {
    pub center: TransitionCenter,
    pub eta: f64,
}

impl ActivationParams {
    pub fn new(center: TransitionCenter, eta: f64) -> Self {
        ActivationParams { center, eta }
    }

    /// Fixed x_m and eta, the tunables of the generic ESA.
    pub fn fixed(xm: f64, eta: f64) -> Self {
        ActivationParams::new(TransitionCenter::Fixed(xm), eta)
    }

    /// theta-dependent x_m and eta = 3, as used by the analytical ESA.
    pub fn analytical() -> Self {
        ActivationParams::new(TransitionCenter::ThetaDependent, ETA_ANALYTICAL)
    }

    /// Blend weight of the large-wavenumber limit at (x, theta).
    #[inline]
    pub fn weight(&self, x: f64, theta: f64) -> f64 {
        activation(x, self.center.at(theta), self.eta)
    }
}

impl Default for ActivationParams {
    fn default() -> Self {
        ActivationParams::analytical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_activation_half_at_center() {
        for theta in [0.0, 0.5, 1.0, 2.0, 4.0] {
            let xm = x_m(theta);
            for eta in [-2.0, 0.1, 1.0, 3.0, 50.0] {
                assert_eq!(activation(xm, xm, eta), 0.5);
            }
        }
    }

    #[test]
    fn test_x_m_values() {
        assert_eq!(x_m(0.0), 2.64);
        assert!((x_m(2.0) - 3.58).abs() < EPS14);
    }

    #[test]
    fn test_activation_saturation() {
        let xm = 3.0;
        let eta = 3.0;
        // |eta·(x - xm)| > 20
        assert!(activation(xm + 7.0, xm, eta) > 1.0 - EPS9);
        assert!(activation(xm - 7.0, xm, eta) < EPS9);
        assert_eq!(activation(1.0e6, xm, eta), 1.0);
        assert_eq!(activation(-1.0e6, xm, eta), 0.0);
    }

    #[test]
    fn test_activation_reference_value() {
        assert!((activation(2.0, 3.0, 3.0) - 0.002472623156634768).abs() < EPS14);
    }

    #[test]
    fn test_transition_center() {
        let fixed = ActivationParams::fixed(3.0, 3.0);
        assert_eq!(fixed.center.at(0.0), 3.0);
        assert_eq!(fixed.center.at(4.0), 3.0);
        assert_eq!(fixed.weight(3.0, 1.7), 0.5);

        let analytical = ActivationParams::default();
        assert_eq!(analytical.eta, ETA_ANALYTICAL);
        assert_eq!(analytical.center.at(2.0), x_m(2.0));
        assert_eq!(analytical.weight(x_m(2.0), 2.0), 0.5);
    }

    proptest! {
        #[test]
        fn prop_activation_monotonic(
            x in -50.0f64..50.0,
            dx in 0.0f64..10.0,
            xm in 0.0f64..6.0,
            eta in 0.01f64..20.0,
        ) {
            let a0 = activation(x, xm, eta);
            let a1 = activation(x + dx, xm, eta);
            prop_assert!(a1 >= a0);
            prop_assert!((0.0..=1.0).contains(&a0));
        }

        #[test]
        fn prop_activation_symmetric(d in 0.0f64..5.0, xm in 0.0f64..6.0, eta in 0.01f64..20.0) {
            let lo = activation(xm - d, xm, eta);
            let hi = activation(xm + d, xm, eta);
            prop_assert!((lo + hi - 1.0).abs() < EPS12);
        }
    }
}
