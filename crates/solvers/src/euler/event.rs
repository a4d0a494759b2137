/// Event emitted by the Euler integrator for each mesh point.
///
/// Step 0 is the initial condition before any integration.
/// Steps 1..=N are emitted after each integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The step number (0 for the initial condition).
    pub step: usize,

    /// The mesh point for this step.
    pub t: f64,

    /// The state at `t`.
    pub y: f64,
}
