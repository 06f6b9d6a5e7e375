/// Receives solver events and decides how the iteration should proceed.
///
/// Observers let callers monitor or steer a solver without changing its API:
/// logging, recording convergence history, or stopping early.
///
/// `observe` returns `Option<A>`, where `Some(action)` requests a
/// solver-specific action and `None` lets the solver continue unchanged.
///
/// Closures implement `Observer` automatically, and `()` is a no-op observer.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_observer_never_acts() {
        let mut observer = ();
        let action: Option<()> = observer.observe(&1.0);
        assert!(action.is_none());
    }

    #[test]
    fn closure_observer_returns_action() {
        let mut observer = |event: &f64| (*event > 1.0).then_some("stop");
        assert_eq!(observer.observe(&0.5), None);
        assert_eq!(observer.observe(&2.0), Some("stop"));
    }
}
