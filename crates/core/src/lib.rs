//! Core traits and types shared by the pame solvers and physics models.
//!
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`Snapshot`] — a captured input/output pair from a model call
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`EquationProblem`] — adapts solver variables to model inputs and
//!   computes residuals from model outputs
//! - [`DerivativeProblem`] — a scalar equation problem that also knows the
//!   slope of its residual

mod model;
mod observer;
mod problems;

pub use observer::Observer;
pub use problems::{DerivativeProblem, EquationProblem};
pub use {model::Model, model::Snapshot};
