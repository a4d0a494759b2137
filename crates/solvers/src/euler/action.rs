/// Control actions supported by the Euler integrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Abort the integration.
    ///
    /// The partial solution is discarded and the solve returns
    /// [`Error::StoppedEarly`](super::Error::StoppedEarly).
    StopEarly,
}
