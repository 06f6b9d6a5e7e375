//! Newton–Raphson iteration from a single starting point.
//!
//! ```text
//! x_{n+1} = x_n − f(x_n) / f'(x_n)
//! ```
//!
//! Stops when `|f(x_n)| < residual_tol`. Requires a [`DerivativeProblem`].
//! Converges quadratically near a simple root, but may diverge from a poor
//! starting point; the iteration cap bounds that case.
//!
//! # Observer Events
//!
//! One [`Event`] per iterate, starting with `x0` at `iter == 0`.


pub use super::open::{Error, Event};

use pame_core::{DerivativeProblem, Model, Observer};

use super::{Action, Config, Solution, evaluate, evaluate::slope, open};

/// Finds a root using Newton's method.
///
/// # Errors
///
/// Returns an error if the derivative is zero or non-finite at an iterate,
/// or if the model or problem fails during evaluation.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    x0: f64,
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: DerivativeProblem<Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    let start = evaluate(model, problem, x0)?;

    open::iterate(model, problem, start, config, observer, |eval| {
        let derivative = slope(problem, eval).map_err(Error::problem)?;
        let derivative = open::check_derivative(eval.x, derivative)?;
        Ok(eval.x - eval.residual / derivative)
    })
}

/// Runs Newton's method without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    x0: f64,
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: DerivativeProblem<Input = M::Input, Output = M::Output>,
{
    solve(model, problem, x0, config, ())
}
