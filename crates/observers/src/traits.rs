//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer can be written once and reused with any solver that implements
//! them.
//!
//! # Example
//!
//! ```rust
//! use euler1d_core::Observer;
//! use euler1d_observers::traits::{CanStopEarly, HasState};
//!
//! struct Ceiling(f64);
//!
//! impl<E: HasState, A: CanStopEarly> Observer<E, A> for Ceiling {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.state() > self.0).then(A::stop_early)
//!     }
//! }
//! ```

use euler1d_solvers::euler;

/// An event that carries a step number.
pub trait HasStep {
    /// Returns the step number, with 0 for the initial condition.
    fn step(&self) -> usize;
}

/// An event that carries the independent variable.
pub trait HasTime {
    /// Returns the time of this event.
    fn time(&self) -> f64;
}

/// An event that carries the dependent variable.
pub trait HasState {
    /// Returns the state of this event.
    fn state(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasStep for euler::Event {
    fn step(&self) -> usize {
        self.step
    }
}

impl HasTime for euler::Event {
    fn time(&self) -> f64 {
        self.t
    }
}

impl HasState for euler::Event {
    fn state(&self) -> f64 {
        self.y
    }
}

impl CanStopEarly for euler::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
