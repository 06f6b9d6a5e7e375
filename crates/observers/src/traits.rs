//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer written once works with bisection, Newton, chord, and secant.
//!
//! # Example
//!
//! ```rust
//! use pame_core::Observer;
//! use pame_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.residual().abs() < self.tolerance).then(A::stop_early)
//!     }
//! }
//! ```

use pame_solvers::equation::{Action, bisection, newton};

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual at the current iterate.
    fn residual(&self) -> f64;
}

/// An event that identifies an iterate.
pub trait HasIterate {
    /// Returns the iteration counter.
    fn iter(&self) -> usize;

    /// Returns the evaluated point.
    fn x(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl<I, O> HasResidual for bisection::Event<'_, I, O> {
    fn residual(&self) -> f64 {
        self.eval.residual
    }
}

impl<I, O> HasIterate for bisection::Event<'_, I, O> {
    fn iter(&self) -> usize {
        self.iter
    }

    fn x(&self) -> f64 {
        self.eval.x
    }
}

// Newton, chord, and secant share one event type.
impl<I, O> HasResidual for newton::Event<'_, I, O> {
    fn residual(&self) -> f64 {
        self.eval.residual
    }
}

impl<I, O> HasIterate for newton::Event<'_, I, O> {
    fn iter(&self) -> usize {
        self.iter
    }

    fn x(&self) -> f64 {
        self.eval.x
    }
}

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
