//! Core traits for the euler1d workspace.
//!
//! This crate defines the shared abstractions that the expression evaluator,
//! the integrator, and the observers build on:
//!
//! - [`Rhs`]: the right-hand side `f(t, y)` of a first-order ODE
//! - [`Observer`]: receives solver events and optionally returns control actions

mod observer;
mod rhs;

pub use observer::Observer;
pub use rhs::{FnRhs, Rhs, rhs_fn};
