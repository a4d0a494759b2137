//! Forward Euler integrator for scalar initial value problems.
//!
//! Given `dy/dt = f(t, y)` and `y(t_0) = y_0`, the integrator walks a uniform
//! [`Mesh`] using explicit Euler:
//!
//! ```text
//! y_{i+1} = y_i + h * f(t_i, y_i)
//! ```
//!
//! The method is first order: the local truncation error is O(h²) per step
//! and the global error over the domain is O(h).
//!
//! Integration is lazy. Building a [`Mesh`] or a right-hand side never
//! integrates; only [`solve`] and [`solve_unobserved`] do.
//!
//! # Example
//!
//! ```
//! use euler1d_core::rhs_fn;
//! use euler1d_solvers::{Mesh, euler};
//!
//! let mesh = Mesh::new(0.0, 1.0, 2)?;
//! let solution = euler::solve_unobserved(&rhs_fn(|_t, y| y), mesh, 1.0)?;
//!
//! assert_eq!(solution.values(), &[1.0, 1.5, 2.25]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod action;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::Solution;

use euler1d_core::{Observer, Rhs};

use crate::Mesh;

/// Integrates `dy/dt = rhs(t, y)` over `mesh` from `y0` using forward Euler.
///
/// # Algorithm
///
/// 1. Emit an [`Event`] for the initial condition at step 0.
/// 2. For each step `i` in `0..n`:
///    - Evaluate the slope `f(t_i, y_i)`.
///    - Step the state forward: `y_{i+1} = y_i + h * slope`, where `h` is
///      the mesh's step size.
///    - Emit an [`Event`] for step `i + 1`.
/// 3. Return the solution, which takes ownership of the mesh.
///
/// Non-finite states are not special-cased. They propagate through the
/// recurrence and can be detected with [`Solution::is_finite`].
///
/// # Observer
///
/// The observer receives every [`Event`] and may return
/// [`Action::StopEarly`] to abort the integration.
///
/// # Errors
///
/// Returns [`Error::Rhs`] if the right-hand side fails at any step and
/// [`Error::StoppedEarly`] if the observer stops the solve. In both cases no
/// partial solution is returned.
pub fn solve<R, Obs>(rhs: &R, mesh: Mesh, y0: f64, mut observer: Obs) -> Result<Solution, Error>
where
    R: Rhs + ?Sized,
    Obs: Observer<Event, Action>,
{
    let h = mesh.step_size();
    let points = mesh.points();

    log::debug!(
        "euler: integrating {} steps over [{}, {}] with h = {h}, y0 = {y0}",
        mesh.steps(),
        mesh.start(),
        mesh.end(),
    );

    let mut values = Vec::with_capacity(points.len());
    values.push(y0);

    let initial = Event {
        step: 0,
        t: points[0],
        y: y0,
    };
    if let Some(Action::StopEarly) = observer.observe(&initial) {
        return Err(Error::StoppedEarly { step: 0 });
    }

    let mut y = y0;
    for (i, &t) in points[..mesh.steps()].iter().enumerate() {
        let slope = rhs.eval(t, y).map_err(|err| Error::rhs(i, t, y, err))?;
        y += h * slope;
        values.push(y);

        let event = Event {
            step: i + 1,
            t: points[i + 1],
            y,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            log::debug!("euler: stopped by observer at step {}", i + 1);
            return Err(Error::StoppedEarly { step: i + 1 });
        }
    }

    log::debug!("euler: finished, y({}) = {y}", mesh.end());

    Ok(Solution::new(mesh, values))
}

/// Integrates without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns [`Error::Rhs`] if the right-hand side fails at any step.
pub fn solve_unobserved<R>(rhs: &R, mesh: Mesh, y0: f64) -> Result<Solution, Error>
where
    R: Rhs + ?Sized,
{
    solve(rhs, mesh, y0, ())
}
