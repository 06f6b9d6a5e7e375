//! Solvers for scalar equation problems — finding `x` such that `f(x) = 0`.
//!
//! An [`EquationProblem`] maps the solver variable `x` to a model input,
//! calls the model, and computes a residual. Solvers in this module drive
//! that residual below a tolerance.
//!
//! # Solvers
//!
//! - [`bisection`] — halves a bracket `[low, high]` around a sign change
//! - [`chord`] — fixed-slope iteration `x ← x − f(x)/f'(x₀)`
//! - [`newton`] — Newton–Raphson `x ← x − f(x)/f'(x)`
//! - [`secant`] — two-point secant update, no derivative required
//! - [`root`] — selects one of the above from a [`root::Method`]
//!
//! Every solver runs an explicit loop capped by [`Config::max_iters`], and
//! every solver converges on the residual alone: `|f(x)| < residual_tol`.
//!
//! [`EquationProblem`]: pame_core::EquationProblem

mod action;
mod config;
mod evaluate;
mod open;
mod scalar;
mod solution;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};
pub use scalar::{NoDerivative, ScalarFn};
pub use solution::{Solution, Status};

pub mod bisection;
pub mod chord;
pub mod newton;
pub mod root;
pub mod secant;
