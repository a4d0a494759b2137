//! TOML configuration for a single solve.
//!
//! ```toml
//! [mesh_1d]
//! n = 10
//! domain_start = 0.0
//! domain_end = 5.0
//!
//! [initial_conditions]
//! y_0 = 1.0
//!
//! [ode_function]
//! expression = "cos(t) - y"
//!
//! [output]                    # optional
//! csv_file = "solution.csv"
//! ```

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

use euler1d_solvers::MeshError;

/// Errors that can occur when loading or validating a [`Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("n must be a positive integer, got {0}")]
    NonPositiveSteps(i64),

    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("expression is empty")]
    EmptyExpression,

    #[error("invalid mesh: {0}")]
    Mesh(#[from] MeshError),
}

/// Mesh parameters, the `[mesh_1d]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MeshConfig {
    /// Number of steps; read signed so negative values fail validation.
    pub n: i64,
    pub domain_start: f64,
    pub domain_end: f64,
}

/// The `[initial_conditions]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InitialConditions {
    pub y_0: f64,
}

/// The `[ode_function]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OdeFunction {
    /// Right-hand side `f(t, y)`, e.g. `"cos(t) - y"`.
    pub expression: String,
}

/// The optional `[output]` section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub csv_file: Option<PathBuf>,
}

/// A solver configuration as read from TOML, before validation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub mesh_1d: MeshConfig,
    pub initial_conditions: InitialConditions,
    pub ode_function: OdeFunction,
    #[serde(default)]
    pub output: OutputConfig,
}

/// A validated configuration, ready to solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub expression: String,
    pub domain_start: f64,
    pub domain_end: f64,
    pub steps: usize,
    pub y0: f64,
    pub csv_file: Option<PathBuf>,
}

impl Settings {
    /// Returns the signed step size `h = (domain_end - domain_start) / steps`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn step_size(&self) -> f64 {
        (self.domain_end - self.domain_start) / self.steps as f64
    }
}

impl Config {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not valid TOML, a
    /// required section or field is missing, or an unknown field is present.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read, otherwise as
    /// [`Config::from_toml_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        log::debug!("read configuration from {}", path.display());
        Self::from_toml_str(&text)
    }

    /// Checks the values and returns the [`Settings`] to solve with.
    ///
    /// # Errors
    ///
    /// Returns an error if `n` is not positive, a bound or `y_0` is not
    /// finite, or the expression is blank.
    pub fn validate(&self) -> Result<Settings, ConfigError> {
        let MeshConfig {
            n,
            domain_start,
            domain_end,
        } = self.mesh_1d;

        let steps = usize::try_from(n)
            .ok()
            .filter(|&steps| steps > 0)
            .ok_or(ConfigError::NonPositiveSteps(n))?;

        for (field, value) in [
            ("domain_start", domain_start),
            ("domain_end", domain_end),
            ("y_0", self.initial_conditions.y_0),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }

        let expression = self.ode_function.expression.trim();
        if expression.is_empty() {
            return Err(ConfigError::EmptyExpression);
        }

        Ok(Settings {
            expression: expression.to_owned(),
            domain_start,
            domain_end,
            steps,
            y0: self.initial_conditions.y_0,
            csv_file: self.output.csv_file.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = r#"
        [mesh_1d]
        n = 10
        domain_start = 0.0
        domain_end = 5.0

        [initial_conditions]
        y_0 = 1.0

        [ode_function]
        expression = "cos(t) - y"

        [output]
        csv_file = "solution.csv"
    "#;

    fn with_mesh(mesh: &str) -> String {
        format!(
            "[mesh_1d]\n{mesh}\n\
             [initial_conditions]\ny_0 = 1.0\n\
             [ode_function]\nexpression = \"-y\"\n"
        )
    }

    #[test]
    fn parses_and_validates_example() {
        let config = Config::from_toml_str(EXAMPLE).expect("should parse");
        let settings = config.validate().expect("should validate");

        assert_eq!(
            settings,
            Settings {
                expression: "cos(t) - y".into(),
                domain_start: 0.0,
                domain_end: 5.0,
                steps: 10,
                y0: 1.0,
                csv_file: Some(PathBuf::from("solution.csv")),
            }
        );
    }

    #[test]
    fn output_section_is_optional() {
        let text = with_mesh("n = 4\ndomain_start = 0\ndomain_end = 1");
        let settings = Config::from_toml_str(&text).unwrap().validate().unwrap();

        assert_eq!(settings.csv_file, None);
        assert_eq!(settings.domain_end, 1.0);
        assert_eq!(settings.step_size(), 0.25);
    }

    #[test]
    fn non_positive_steps() {
        for n in [0, -10] {
            let text = with_mesh(&format!("n = {n}\ndomain_start = 0.0\ndomain_end = 1.0"));
            let err = Config::from_toml_str(&text).unwrap().validate().unwrap_err();
            assert!(matches!(err, ConfigError::NonPositiveSteps(got) if got == n));
        }
    }

    #[test]
    fn fractional_steps_are_a_parse_error() {
        let text = with_mesh("n = 3.5\ndomain_start = 0.0\ndomain_end = 1.0");
        assert!(matches!(
            Config::from_toml_str(&text),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn non_finite_bounds() {
        let text = with_mesh("n = 4\ndomain_start = 0.0\ndomain_end = inf");
        let err = Config::from_toml_str(&text).unwrap().validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NonFinite {
                field: "domain_end",
                ..
            }
        ));
    }

    #[test]
    fn missing_section() {
        let text = "[mesh_1d]\nn = 4\ndomain_start = 0.0\ndomain_end = 1.0\n";
        assert!(matches!(
            Config::from_toml_str(text),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn unknown_field() {
        let text = with_mesh("n = 4\ndomain_start = 0.0\ndomain_end = 1.0\nh = 0.25");
        assert!(matches!(
            Config::from_toml_str(&text),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn blank_expression() {
        let mut config = Config::from_toml_str(EXAMPLE).unwrap();
        config.ode_function.expression = "   ".into();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyExpression)
        ));
    }

    #[test]
    fn unreadable_file() {
        let err = Config::from_path("does/not/exist.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("does/not/exist.toml"));
    }
}
