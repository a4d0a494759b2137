use std::error::Error as StdError;

/// Errors that can occur during Euler integration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The right-hand side failed at a mesh point.
    #[error("right-hand side failed at step {step} (t = {t}, y = {y}): {source}")]
    Rhs {
        step: usize,
        t: f64,
        y: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// An observer requested [`Action::StopEarly`](super::Action::StopEarly).
    #[error("stopped by observer at step {step}")]
    StoppedEarly { step: usize },
}

impl Error {
    pub(crate) fn rhs<E: StdError + Send + Sync + 'static>(
        step: usize,
        t: f64,
        y: f64,
        err: E,
    ) -> Self {
        Self::Rhs {
            step,
            t,
            y,
            source: Box::new(err),
        }
    }

    /// Returns the step at which integration stopped.
    #[must_use]
    pub fn step(&self) -> usize {
        match self {
            Self::Rhs { step, .. } | Self::StoppedEarly { step } => *step,
        }
    }
}
