use pame_core::Observer;

use crate::traits::{CanStopEarly, HasIterate, HasResidual};

/// Stops a solver once the residual drops below a looser tolerance.
///
/// Useful for a cheap first pass: the solver's own tolerance stays tight
/// while this observer accepts an earlier iterate. `min_iters` keeps the
/// observer quiet for the first few iterates.
#[derive(Debug, Clone, Copy)]
pub struct EarlyStop {
    tolerance: f64,
    min_iters: usize,
}

impl EarlyStop {
    /// Stops as soon as `|residual| < tolerance`.
    #[must_use]
    pub fn below(tolerance: f64) -> Self {
        Self {
            tolerance,
            min_iters: 0,
        }
    }

    /// Ignores iterates before `min_iters`.
    #[must_use]
    pub fn after(self, min_iters: usize) -> Self {
        Self { min_iters, ..self }
    }
}

impl<E, A> Observer<E, A> for EarlyStop
where
    E: HasIterate + HasResidual,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.iter() >= self.min_iters && event.residual().abs() < self.tolerance)
            .then(A::stop_early)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pame_solvers::equation::{Config, ScalarFn, Status, bisection, newton};

    #[test]
    fn stops_bisection_at_the_looser_tolerance() {
        let f = ScalarFn::new(|x: f64| x.exp() - 3.0);
        let config = Config::default();

        let full = bisection::solve_unobserved(&f, &f, [0.0, 2.0], &config).unwrap();
        let early = bisection::solve(&f, &f, [0.0, 2.0], &config, EarlyStop::below(1e-2)).unwrap();

        assert_eq!(early.status, Status::StoppedByObserver);
        assert!(early.residual.abs() < 1e-2);
        assert!(early.iters < full.iters);
    }

    #[test]
    fn waits_for_min_iters() {
        // The start point already satisfies the looser tolerance.
        let f = ScalarFn::new(|x: f64| x * x - 2.0).with_derivative(|x: f64| 2.0 * x);
        let observer = EarlyStop::below(1.0).after(2);

        let solution = newton::solve(&f, &f, 1.2, &Config::default(), observer).unwrap();

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 2);
    }
}
