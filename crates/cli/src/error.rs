use std::fmt;

use thiserror::Error;

use euler1d_expr::ParseError;
use euler1d_solvers::{MeshError, euler};

use crate::{config::ConfigError, export::ExportError};

/// Errors that can occur while running a configured solve.
///
/// Each variant belongs to one [`Stage`] of the pipeline, and the message
/// starts with that stage's name.
#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("expression error: {0}")]
    Expression(#[from] ParseError),

    #[error("integration error: {0}")]
    Integration(#[from] euler::Error),

    #[error("integration error: solution diverged at step {step}")]
    Diverged { step: usize },

    #[error("export error: {0}")]
    Export(#[from] ExportError),

    #[cfg(feature = "plot")]
    #[error("plot error: {0}")]
    Plot(String),
}

impl From<MeshError> for Error {
    fn from(err: MeshError) -> Self {
        Self::Config(ConfigError::Mesh(err))
    }
}

impl Error {
    /// Returns the pipeline stage that failed.
    #[must_use]
    pub fn stage(&self) -> Stage {
        match self {
            Self::Config(_) => Stage::Configuration,
            Self::Expression(_) => Stage::Expression,
            Self::Integration(_) | Self::Diverged { .. } => Stage::Integration,
            Self::Export(_) => Stage::Export,
            #[cfg(feature = "plot")]
            Self::Plot(_) => Stage::Plot,
        }
    }
}

/// A stage of the solve pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Configuration,
    Expression,
    Integration,
    Export,
    #[cfg(feature = "plot")]
    Plot,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Configuration => "configuration",
            Self::Expression => "expression",
            Self::Integration => "integration",
            Self::Export => "export",
            #[cfg(feature = "plot")]
            Self::Plot => "plot",
        })
    }
}
