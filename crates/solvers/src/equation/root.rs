//! One entry point over every scalar root finder.
//!
//! [`solve`] picks a solver from a [`Method`] and a matching [`Start`], runs
//! it without observation, and turns anything short of convergence into an
//! [`Error`]. [`solve_fn`] does the same for plain closures.
//!
//! | method      | start                                   | derivative |
//! |-------------|-----------------------------------------|------------|
//! | `Bisection` | [`Start::Bracket`]                      | no         |
//! | `Chord`     | [`Start::Point`]                        | yes        |
//! | `Newton`    | [`Start::Point`]                        | yes        |
//! | `Secant`    | [`Start::Point`] or [`Start::Pair`]     | no         |

mod error;
mod method;
mod start;


pub use error::Error;
pub use method::Method;
pub use start::Start;

use pame_core::{DerivativeProblem, EquationProblem, Model};
use tracing::debug;

use super::{Config, ScalarFn, Solution, Status, bisection, chord, newton, secant};

/// A converged root from [`solve_fn`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Root {
    pub x: f64,
    pub residual: f64,
    pub iters: usize,
}

impl<I, O> From<Solution<I, O>> for Root {
    fn from(solution: Solution<I, O>) -> Self {
        Self {
            x: solution.x,
            residual: solution.residual,
            iters: solution.iters,
        }
    }
}

/// Solves a problem that provides an analytic derivative.
///
/// # Errors
///
/// Returns [`Error::StartMismatch`] if `start` does not suit `method`,
/// [`Error::DidNotConverge`] if the iteration cap is reached, or the
/// underlying solver's error.
pub fn solve<M, P>(
    method: Method,
    model: &M,
    problem: &P,
    start: Start,
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: DerivativeProblem<Input = M::Input, Output = M::Output>,
{
    let solution = match method {
        Method::Chord => chord::solve_unobserved(model, problem, start.point(method)?, config)?,
        Method::Newton => newton::solve_unobserved(model, problem, start.point(method)?, config)?,
        Method::Bisection | Method::Secant => {
            return solve_derivative_free(method, model, problem, start, config);
        }
    };

    finish(method, solution)
}

/// Solves a problem without a derivative.
///
/// # Errors
///
/// Returns [`Error::MissingDerivative`] for [`Method::Newton`] and
/// [`Method::Chord`], plus every error of [`solve`].
pub fn solve_derivative_free<M, P>(
    method: Method,
    model: &M,
    problem: &P,
    start: Start,
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    let solution = match (method, start) {
        (Method::Bisection, Start::Bracket(bracket)) => {
            bisection::solve_unobserved(model, problem, bracket, config)?
        }
        (Method::Secant, Start::Point(x0)) => {
            secant::solve_from_unobserved(model, problem, x0, config)?
        }
        (Method::Secant, Start::Pair(points)) => {
            secant::solve_unobserved(model, problem, points, config)?
        }
        (Method::Chord | Method::Newton, _) => return Err(Error::MissingDerivative { method }),
        (method, start) => {
            return Err(Error::StartMismatch {
                method,
                start: start.kind(),
            });
        }
    };

    finish(method, solution)
}

/// Finds a root of a closure.
///
/// `derivative` is required by [`Method::Newton`] and [`Method::Chord`] and
/// ignored by the others.
///
/// # Errors
///
/// See [`solve`] and [`solve_derivative_free`].
pub fn solve_fn<F>(
    method: Method,
    residual: F,
    derivative: Option<&dyn Fn(f64) -> f64>,
    start: Start,
    config: &Config,
) -> Result<Root, Error>
where
    F: Fn(f64) -> f64,
{
    let f = ScalarFn::new(residual);
    match derivative {
        Some(derivative) if method.requires_derivative() => {
            let f = f.with_derivative(derivative);
            solve(method, &f, &f, start, config).map(Root::from)
        }
        _ => solve_derivative_free(method, &f, &f, start, config).map(Root::from),
    }
}

fn finish<I, O>(method: Method, solution: Solution<I, O>) -> Result<Solution<I, O>, Error> {
    let Solution {
        x, residual, iters, ..
    } = solution;

    match solution.status {
        Status::Converged => {
            debug!(%method, x, residual, iters, "root converged");
            Ok(solution)
        }
        Status::MaxIters => {
            debug!(%method, x, residual, iters, "root did not converge");
            Err(Error::DidNotConverge {
                method,
                iters,
                x,
                residual,
            })
        }
        Status::StoppedByObserver => Err(Error::StoppedByObserver { method, iters }),
    }
}
