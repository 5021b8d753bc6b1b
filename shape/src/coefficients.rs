use lfcconsts::*;
use lfctypes::LfcError;

/// The 36 fitted numbers of the shape parametrization.
///
/// Layout is positional: four blocks of nine in the order alpha, beta,
/// gamma, delta; inside a block three (a, b, c) triples feeding the theta
/// stage, whose outputs are the (a, b, c) of the rs stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoefficientVector([f64; N_COEFFICIENTS]);

/// Reference table fitted to the neural-network representation of the
/// static LFC.
#[rustfmt::skip]
pub const ESA_ABCD: CoefficientVector = CoefficientVector([
    // alpha
    0.66477593, -4.59280227, 1.24649624,
    -1.27089927, 1.26706839, -0.4327608,
    2.09717766, 1.15424724, -0.65356955,
    // beta
    -1.0206202, 5.16041218, -0.23880981,
    1.07356921, -1.67311761, 0.58928105,
    0.8469662, 1.54029035, -0.71145445,
    // gamma
    -2.31252076, 5.83181391, 2.29489749,
    1.76614589, -0.09710839, -0.33180686,
    0.56560236, 1.10948188, -0.43213648,
    // delta
    1.3742155, -4.01393906, -1.65187145,
    -1.75381153, -1.17022854, 0.76772906,
    0.63867766, 1.07863273, -0.35630091,
]);

impl CoefficientVector {
    pub const fn new(coeffs: [f64; N_COEFFICIENTS]) -> Self {
        CoefficientVector(coeffs)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// The nine entries belonging to shape coefficient `p` (0 = alpha ... 3 = delta).
    pub fn block(&self, p: usize) -> &[f64] {
        let start = p * N_COEFFICIENTS_PER_PARAMETER;
        &self.0[start..start + N_COEFFICIENTS_PER_PARAMETER]
    }
}

impl Default for CoefficientVector {
    fn default() -> Self {
        ESA_ABCD
    }
}

impl TryFrom<&[f64]> for CoefficientVector {
    type Error = LfcError;

    fn try_from(coeffs: &[f64]) -> Result<Self, Self::Error> {
        let table: [f64; N_COEFFICIENTS] =
            coeffs
                .try_into()
                .map_err(|_| LfcError::InvalidCoefficients {
                    expected: N_COEFFICIENTS,
                    got: coeffs.len(),
                })?;

        Ok(CoefficientVector(table))
    }
}

impl TryFrom<Vec<f64>> for CoefficientVector {
    type Error = LfcError;

    fn try_from(coeffs: Vec<f64>) -> Result<Self, Self::Error> {
        CoefficientVector::try_from(coeffs.as_slice())
    }
}
