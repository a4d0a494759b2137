use euler1d_core::Observer;

use crate::traits::{CanStopEarly, HasState, HasStep};

/// An observer that stops a solve once the state becomes non-finite.
///
/// Forward Euler lets overflow propagate, so an unstable problem can fill the
/// rest of the solution with infinities or NaN. The guard stops at the first
/// such step and remembers where it happened.
///
/// Pass `&mut guard` to a solver to inspect [`diverged_at`] afterward.
///
/// [`diverged_at`]: DivergenceGuard::diverged_at
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DivergenceGuard {
    diverged_at: Option<usize>,
}

impl DivergenceGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the step at which a non-finite state was seen, if any.
    #[must_use]
    pub fn diverged_at(&self) -> Option<usize> {
        self.diverged_at
    }
}

impl<E, A> Observer<E, A> for DivergenceGuard
where
    E: HasStep + HasState,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if event.state().is_finite() {
            return None;
        }
        self.diverged_at.get_or_insert(event.step());
        Some(A::stop_early())
    }
}

/// Allows `&mut DivergenceGuard` to be passed to solvers that take an observer
/// by value, so the guard can be inspected after the solve.
impl<E, A> Observer<E, A> for &mut DivergenceGuard
where
    E: HasStep + HasState,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use euler1d_core::rhs_fn;
    use euler1d_solvers::{
        Mesh,
        euler::{self, Action, Error, Event},
    };

    #[test]
    fn finite_states_pass() {
        let mut guard = DivergenceGuard::new();
        let event = Event {
            step: 1,
            t: 0.0,
            y: 1.0,
        };

        assert_eq!(Observer::<Event, Action>::observe(&mut guard, &event), None);
        assert_eq!(guard.diverged_at(), None);
    }

    #[test]
    fn stops_a_blowup() {
        let f = rhs_fn(|_t, y| y * y);
        let mesh = Mesh::new(0.0, 10.0, 10).unwrap();
        let mut guard = DivergenceGuard::new();

        let err = euler::solve(&f, mesh, 1e200, &mut guard).expect_err("should diverge");

        assert!(matches!(err, Error::StoppedEarly { step: 1 }));
        assert_eq!(guard.diverged_at(), Some(1));
    }
}
