use pame_core::Observer;
use tracing::{Level, debug, enabled, trace};

use crate::traits::{HasIterate, HasResidual};

/// Forwards every iterate to `tracing`.
///
/// Events are emitted at `TRACE` level under the `pame_observers::trace`
/// target, tagged with a label so interleaved solves can be told apart.
/// The observer never steers the solver.
///
/// ```
/// use pame_observers::TraceObserver;
/// use pame_solvers::equation::{Config, ScalarFn, bisection};
///
/// let f = ScalarFn::new(|x: f64| x * x - 2.0);
/// let solution = bisection::solve(&f, &f, [0.0, 2.0], &Config::default(), TraceObserver::new("sqrt2"))?;
/// assert!(solution.is_converged());
/// # Ok::<(), bisection::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct TraceObserver {
    label: String,
    steps: usize,
}

impl TraceObserver {
    /// Creates an observer that tags its events with `label`.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            steps: 0,
        }
    }

    /// Returns the label attached to every event.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns how many events have been observed.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }
}

impl<E, A> Observer<E, A> for TraceObserver
where
    E: HasIterate + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.steps += 1;

        if enabled!(Level::TRACE) {
            trace!(
                label = %self.label,
                iter = event.iter(),
                x = event.x(),
                residual = event.residual(),
                "iterate"
            );
        } else if self.steps == 1 {
            debug!(label = %self.label, x = event.x(), "solve started");
        }

        None
    }
}

impl<E, A> Observer<E, A> for &mut TraceObserver
where
    E: HasIterate + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pame_solvers::equation::{Config, ScalarFn, newton};

    #[test]
    fn counts_every_event_without_steering() {
        let f = ScalarFn::new(|x: f64| x * x - 2.0).with_derivative(|x: f64| 2.0 * x);
        let mut observer = TraceObserver::new("newton");

        let solution = newton::solve(&f, &f, 1.0, &Config::default(), &mut observer).unwrap();

        assert!(solution.is_converged());
        // One event for the start point plus one per step.
        assert_eq!(observer.steps(), solution.iters + 1);
        assert_eq!(observer.label(), "newton");
    }
}
