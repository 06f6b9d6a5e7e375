//! Chord iteration (often labelled "fixed-point").
//!
//! The slope is evaluated once, at the starting point, and reused:
//!
//! ```text
//! λ = 1 / f'(x0)
//! x_{n+1} = x_n − λ · f(x_n)
//! ```
//!
//! This is a modified Newton method rather than a plain fixed-point
//! iteration `x = g(x)`. It converges linearly when `|1 − λ·f'(x*)| < 1`
//! at the root `x*`, so it needs a start whose slope is close to the slope
//! at the root.
//!
//! # Observer Events
//!
//! One [`Event`] per iterate, starting with `x0` at `iter == 0`.


pub use super::open::{Error, Event};

use pame_core::{DerivativeProblem, Model, Observer};

use super::{Action, Config, Solution, evaluate, evaluate::slope, open};

/// Finds a root using the chord method.
///
/// # Errors
///
/// Returns an error if the derivative at `x0` is zero or non-finite, or if
/// the model or problem fails during evaluation.
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
    let derivative = slope(problem, &start).map_err(Error::problem)?;
    let lambda = 1.0 / open::check_derivative(x0, derivative)?;

    open::iterate(model, problem, start, config, observer, |eval| {
        Ok(eval.x - lambda * eval.residual)
    })
}

/// Runs the chord method without observation.
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
