/// Receives solver events and decides how the solve should proceed.
///
/// The `observe` method returns `Option<A>`, where `Some(action)` requests a
/// solver-specific action and `None` lets the solver continue unchanged.
///
/// Closures implement `Observer` automatically, `()` is a no-op observer, and
/// a pair `(first, second)` forwards every event to both observers and returns
/// the first action requested.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

impl<E, A, O1, O2> Observer<E, A> for (O1, O2)
where
    O1: Observer<E, A>,
    O2: Observer<E, A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let first = self.0.observe(event);
        let second = self.1.observe(event);
        first.or(second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_observer_never_acts() {
        let mut obs = ();
        assert_eq!(Observer::<u32, &str>::observe(&mut obs, &7), None);
    }

    #[test]
    fn pair_sees_every_event_and_prefers_first_action() {
        let mut first_seen = Vec::new();
        let mut second_seen = Vec::new();

        {
            let first = |e: &u32| {
                first_seen.push(*e);
                (*e == 2).then_some("first")
            };
            let second = |e: &u32| {
                second_seen.push(*e);
                (*e >= 2).then_some("second")
            };
            let mut pair = (first, second);

            assert_eq!(pair.observe(&1), None);
            assert_eq!(pair.observe(&2), Some("first"));
            assert_eq!(pair.observe(&3), Some("second"));
        }

        assert_eq!(first_seen, vec![1, 2, 3]);
        assert_eq!(second_seen, vec![1, 2, 3]);
    }
}
