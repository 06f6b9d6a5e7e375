//! Secant iteration from two points.
//!
//! ```text
//! x_{n+1} = x_n − f(x_n) · (x_n − x_{n−1}) / (f(x_n) − f(x_{n−1}))
//! ```
//!
//! [`solve`] takes both starting points. [`solve_from`] takes one point
//! `x0` and synthesizes the earlier point at `x0 − delta`, with `delta`
//! from [`Config::delta`]. The side matters when several roots are nearby:
//! the first step follows the chord through `x0 − delta` and `x0`.
//!
//! No derivative is needed.
//!
//! # Observer Events
//!
//! One [`Event`] per iterate, starting with the second starting point at
//! `iter == 0`.


pub use super::open::{Error, Event};

use pame_core::{EquationProblem, Model, Observer};

use super::{Action, Config, Solution, evaluate, open};

/// Finds a root using the secant method from `[previous, current]`.
///
/// # Errors
///
/// Returns [`Error::ZeroStepDelta`] if both points coincide,
/// [`Error::FlatSecant`] if two consecutive residuals are equal, or an
/// evaluation error.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    points: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    let [x_prev, x_curr] = points;

    if x_prev == x_curr {
        return Err(Error::ZeroStepDelta { x: x_curr });
    }

    let prev = evaluate(model, problem, x_prev)?;
    let mut prev = (prev.x, prev.residual);
    let start = evaluate(model, problem, x_curr)?;

    open::iterate(model, problem, start, config, observer, |eval| {
        let (x0, r0) = prev;
        let denom = eval.residual - r0;

        if denom == 0.0 {
            return Err(Error::FlatSecant {
                x0,
                x1: eval.x,
                residual: r0,
            });
        }

        prev = (eval.x, eval.residual);
        Ok(eval.x - eval.residual * (eval.x - x0) / denom)
    })
}

/// Finds a root using the secant method from a single point `x0`.
///
/// The second point is synthesized at `x0 − config.delta()`.
///
/// # Errors
///
/// Returns [`Error::ZeroStepDelta`] if `delta` is zero, plus every error
/// of [`solve`].
pub fn solve_from<M, P, Obs>(
    model: &M,
    problem: &P,
    x0: f64,
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    solve(model, problem, [x0 - config.delta(), x0], config, observer)
}

/// Runs [`solve`] without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    points: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    solve(model, problem, points, config, ())
}

/// Runs [`solve_from`] without observation.
///
/// # Errors
///
/// See [`solve_from`].
pub fn solve_from_unobserved<M, P>(
    model: &M,
    problem: &P,
    x0: f64,
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    solve_from(model, problem, x0, config, ())
}
