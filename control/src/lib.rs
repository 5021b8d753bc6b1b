//! `key = value` control file of the generic ESA.
//!
//! ```text
//! # transition center; "theta" selects x_m(theta)
//! esa_x_m = 3.0
//! esa_eta = 3.0
//! neural_query_policy = clamped
//! check_domain = true
//! ```

use activation::{ActivationParams, TransitionCenter};
use esa::{AnalyticalEsa, CoefficientVector, EsaScheme, NeuralLfc, QueryPolicy};
use lfcconsts::*;
use std::{fmt, fs, path::Path};
use surface::{CsrPrefactor, StaticLfc};

#[derive(Debug, thiserror::Error)]
pub enum ControlError {
    #[error("cannot read control file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: unknown parameter '{key}'")]
    UnknownKey { line: usize, key: String },

    #[error("line {line}: expected 'key = value', got '{content}'")]
    Malformed { line: usize, content: String },

    #[error("line {line}: invalid value '{value}' for '{key}'")]
    InvalidValue {
        line: usize,
        key: String,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    esa_x_m: TransitionCenter,
    esa_eta: f64,
    neural_query_policy: QueryPolicy,
    check_domain: bool,
}

impl Default for Control {
    fn default() -> Self {
        Control {
            esa_x_m: TransitionCenter::ThetaDependent,
            esa_eta: ETA_ANALYTICAL,
            neural_query_policy: QueryPolicy::Clamped,
            check_domain: true,
        }
    }
}

impl Control {
    pub fn new() -> Control {
        Control::default()
    }

    pub fn get_esa_x_m(&self) -> TransitionCenter {
        self.esa_x_m
    }

    pub fn get_esa_eta(&self) -> f64 {
        self.esa_eta
    }

    pub fn get_neural_query_policy(&self) -> QueryPolicy {
        self.neural_query_policy
    }

    pub fn get_check_domain(&self) -> bool {
        self.check_domain
    }

    pub fn get_activation_params(&self) -> ActivationParams {
        ActivationParams::new(self.esa_x_m, self.esa_eta)
    }

    /// Reads a control file; parameters not present keep their defaults.
    pub fn read_file<P: AsRef<Path>>(&mut self, inpfile: P) -> Result<(), ControlError> {
        let path = inpfile.as_ref();

        let text = fs::read_to_string(path).map_err(|source| ControlError::Io {
            path: path.display().to_string(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "reading control file");

        self.parse_str(&text)
    }

    pub fn parse_str(&mut self, text: &str) -> Result<(), ControlError> {
        for (i, line) in text.lines().enumerate() {
            let line_no = i + 1;
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (key, value) = line.split_once('=').ok_or_else(|| ControlError::Malformed {
                line: line_no,
                content: line.to_string(),
            })?;

            let key = key.trim();
            let value = value.trim();

            let invalid = || ControlError::InvalidValue {
                line: line_no,
                key: key.to_string(),
                value: value.to_string(),
            };

            match key {
                "esa_x_m" => {
                    self.esa_x_m = match value {
                        "theta" => TransitionCenter::ThetaDependent,
                        v => TransitionCenter::Fixed(v.parse().map_err(|_| invalid())?),
                    };
                }

                "esa_eta" => {
                    self.esa_eta = value.parse().map_err(|_| invalid())?;
                }

                "neural_query_policy" => {
                    self.neural_query_policy = QueryPolicy::from_str(value).ok_or_else(invalid)?;
                }

                "check_domain" => {
                    self.check_domain = value.parse().map_err(|_| invalid())?;
                }

                _ => {
                    return Err(ControlError::UnknownKey {
                        line: line_no,
                        key: key.to_string(),
                    });
                }
            }

            tracing::debug!(key, value, "control parameter");
        }

        Ok(())
    }

    /// Generic ESA around a learned model, configured by this file.
    pub fn neural_esa<M: StaticLfc>(&self, model: M) -> EsaScheme<NeuralLfc<M>> {
        EsaScheme::new(
            NeuralLfc::new(model, self.neural_query_policy),
            self.get_activation_params(),
        )
        .with_domain_check(self.check_domain)
    }

    /// Fully analytical ESA. Its x_m(theta) and eta are part of the fit, so
    /// only `check_domain` is taken from this file.
    pub fn analytical_esa<P: CsrPrefactor>(
        &self,
        coeffs: CoefficientVector,
        csr: P,
    ) -> AnalyticalEsa<P> {
        esa::analytical_esa(coeffs, csr).with_domain_check(self.check_domain)
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const OUT_WIDTH1: usize = 28;
        const OUT_WIDTH2: usize = 18;

        let x_m = match self.esa_x_m {
            TransitionCenter::Fixed(xm) => xm.to_string(),
            TransitionCenter::ThetaDependent => "theta".to_string(),
        };

        writeln!(f, "   {:-^80}", " control parameters ")?;
        writeln!(
            f,
            "   {:<width1$} = {:>width2$}",
            "esa_x_m",
            x_m,
            width1 = OUT_WIDTH1,
            width2 = OUT_WIDTH2
        )?;
        writeln!(
            f,
            "   {:<width1$} = {:>width2$}",
            "esa_eta",
            self.esa_eta,
            width1 = OUT_WIDTH1,
            width2 = OUT_WIDTH2
        )?;
        writeln!(
            f,
            "   {:<width1$} = {:>width2$}",
            "neural_query_policy",
            self.neural_query_policy.as_str(),
            width1 = OUT_WIDTH1,
            width2 = OUT_WIDTH2
        )?;
        writeln!(
            f,
            "   {:<width1$} = {:>width2$}",
            "check_domain",
            self.check_domain,
            width1 = OUT_WIDTH1,
            width2 = OUT_WIDTH2
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use esa::ESA_ABCD;

    #[test]
    fn test_defaults() {
        let ctrl = Control::new();

        assert_eq!(ctrl.get_esa_x_m(), TransitionCenter::ThetaDependent);
        assert_eq!(ctrl.get_esa_eta(), 3.0);
        assert_eq!(ctrl.get_neural_query_policy(), QueryPolicy::Clamped);
        assert!(ctrl.get_check_domain());
    }

    #[test]
    fn test_parse_all_keys() {
        let text = "
            # generic ESA
            esa_x_m = 3.0
            esa_eta=2.5

            neural_query_policy = unclamped
            check_domain = false
        ";

        let mut ctrl = Control::new();
        ctrl.parse_str(text).unwrap();

        assert_eq!(ctrl.get_esa_x_m(), TransitionCenter::Fixed(3.0));
        assert_eq!(ctrl.get_esa_eta(), 2.5);
        assert_eq!(ctrl.get_neural_query_policy(), QueryPolicy::Unclamped);
        assert!(!ctrl.get_check_domain());
        assert_eq!(
            ctrl.get_activation_params(),
            ActivationParams::fixed(3.0, 2.5)
        );
    }

    #[test]
    fn test_theta_dependent_center() {
        let mut ctrl = Control::new();
        ctrl.parse_str("esa_x_m = 3.0\nesa_x_m = theta").unwrap();
        assert_eq!(ctrl.get_esa_x_m(), TransitionCenter::ThetaDependent);
    }

    #[test]
    fn test_unknown_key() {
        let mut ctrl = Control::new();
        let err = ctrl.parse_str("esa_eta = 3.0\nxc_scheme = lda-pz").unwrap_err();

        assert!(matches!(err, ControlError::UnknownKey { line: 2, ref key } if key == "xc_scheme"));
    }

    #[test]
    fn test_invalid_values() {
        for text in [
            "esa_eta = sharp",
            "esa_x_m = middle",
            "neural_query_policy = sometimes",
            "check_domain = yes",
        ] {
            let mut ctrl = Control::new();
            let err = ctrl.parse_str(text).unwrap_err();
            assert!(matches!(err, ControlError::InvalidValue { line: 1, .. }), "{}", text);
        }
    }

    #[test]
    fn test_malformed_line() {
        let mut ctrl = Control::new();
        let err = ctrl.parse_str("esa_eta 3.0").unwrap_err();
        assert_eq!(err.to_string(), "line 1: expected 'key = value', got 'esa_eta 3.0'");
    }

    #[test]
    fn test_read_missing_file() {
        let mut ctrl = Control::new();
        let err = ctrl.read_file("/nonexistent/in.esa").unwrap_err();
        assert!(matches!(err, ControlError::Io { .. }));
    }

    #[test]
    fn test_read_file() {
        let path = std::env::temp_dir().join(format!("control_test_{}.esa", std::process::id()));
        fs::write(&path, "esa_x_m = 2.8\nneural_query_policy = unclamped\n").unwrap();

        let mut ctrl = Control::new();
        ctrl.read_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(ctrl.get_esa_x_m(), TransitionCenter::Fixed(2.8));
        assert_eq!(ctrl.get_neural_query_policy(), QueryPolicy::Unclamped);
    }

    #[test]
    fn test_neural_esa_from_control() {
        let mut ctrl = Control::new();
        ctrl.parse_str("esa_x_m = 3.0\nesa_eta = 3.0\nneural_query_policy = clamped")
            .unwrap();

        let model = |x: f64, _rs: f64, _theta: f64| 0.1 * x;
        let scheme = ctrl.neural_esa(model);

        assert_eq!(scheme.source().policy(), QueryPolicy::Clamped);
        assert!((scheme.evaluate(6.0, 6.0, 0.5) - 0.9844919648600693).abs() < EPS12);
    }

    #[test]
    fn test_analytical_esa_from_control() {
        let ctrl = Control::new();
        let scheme = ctrl.analytical_esa(ESA_ABCD, |rs: f64, theta: f64| 0.5 / (1.0 + 0.1 * rs * theta));

        assert_eq!(scheme.activation(), &ActivationParams::analytical());
        assert!((scheme.evaluate(2.6, 10.0, 2.0) - 3.357372786748283).abs() < EPS12 * 3.36);
    }

    #[test]
    fn test_display() {
        let text = Control::new().to_string();
        assert!(text.contains("control parameters"));
        assert!(text.contains("theta"));
        assert!(text.contains("clamped"));
    }
}
