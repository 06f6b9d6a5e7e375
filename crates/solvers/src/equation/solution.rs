use pame_core::Snapshot;

use super::Evaluation;

/// Indicates how an equation solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The residual dropped below the configured tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of an equation solve.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// Final solver status.
    pub status: Status,

    /// The last iterate (the root estimate when converged).
    pub x: f64,

    /// Residual at `x`.
    pub residual: f64,

    /// Snapshot at `x`.
    pub snapshot: Snapshot<I, O>,

    /// Number of solver steps taken.
    pub iters: usize,
}

impl<I, O> Solution<I, O> {
    /// Constructs a solution from an evaluation.
    pub(crate) fn from_eval(eval: Evaluation<I, O>, status: Status, iters: usize) -> Self {
        Self {
            status,
            x: eval.x,
            residual: eval.residual,
            snapshot: eval.snapshot,
            iters,
        }
    }

    /// Returns true if the solver converged.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
