use crate::equation::Evaluation;

/// Iteration event emitted by the bisection solver.
///
/// One event is emitted per midpoint evaluation, before the convergence
/// check, so the final converged midpoint is observed too.
#[derive(Debug)]
pub struct Event<'a, I, O> {
    /// Iteration counter (1-based; one midpoint per iteration).
    pub iter: usize,

    /// Bracket the midpoint was taken from.
    pub bracket: [f64; 2],

    /// Evaluation at the midpoint.
    pub eval: &'a Evaluation<I, O>,
}

impl<I, O> Event<'_, I, O> {
    /// Returns the evaluated midpoint.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.eval.x
    }

    /// Returns the residual at the midpoint.
    #[must_use]
    pub fn residual(&self) -> f64 {
        self.eval.residual
    }
}
