use log::Level;

use euler1d_core::Observer;

use crate::traits::{HasState, HasStep, HasTime};

/// An observer that logs integration progress.
///
/// Every `every`-th step (and always step 0) is logged at the configured
/// level, under the `euler1d::progress` target. It never requests an action.
///
/// # Example
///
/// ```ignore
/// let logger = LogObserver::new().every(100);
/// euler::solve(&rhs, mesh, y0, logger)?;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LogObserver {
    level: Level,
    every: usize,
}

impl LogObserver {
    /// Creates an observer that logs every step at trace level.
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: Level::Trace,
            every: 1,
        }
    }

    /// Sets the log level.
    #[must_use]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Logs only every `n`-th step. Zero is treated as one.
    #[must_use]
    pub fn every(mut self, n: usize) -> Self {
        self.every = n.max(1);
        self
    }

    fn wants(&self, step: usize) -> bool {
        step % self.every == 0
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, A> Observer<E, A> for LogObserver
where
    E: HasStep + HasTime + HasState,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if self.wants(event.step()) {
            log::log!(
                target: "euler1d::progress",
                self.level,
                "step {}: t = {}, y = {}",
                event.step(),
                event.time(),
                event.state(),
            );
        }
        None
    }
}
