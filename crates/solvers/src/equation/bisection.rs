//! Bisection (dichotomy) on a bracket `[low, high]`.
//!
//! # Algorithm
//!
//! Each iteration evaluates the midpoint of the current bracket. If the
//! midpoint residual is below tolerance it is returned. Otherwise the sign
//! of the midpoint residual is compared with the sign at `low` only:
//!
//! - same sign (`f(low)·f(mid) > 0`) → continue on `[mid, high]`
//! - otherwise → continue on `[low, mid]`
//!
//! The residual at `high` is never evaluated, so the sign change between
//! the endpoints is not verified. With a single sign change in the bracket
//! the search converges to it. Without one, the bracket collapses onto
//! `high` and the solver runs into the iteration cap. With several sign
//! changes, the tie-break decides which root is found.
//!
//! # Observer Events
//!
//! One [`Event`] per midpoint. Observers can return [`Action::StopEarly`]
//! to stop with the current midpoint.

mod bracket;
mod error;
mod event;

#[cfg(test)]
mod tests;

pub use bracket::{Bracket, BracketError};
pub use error::Error;
pub use event::Event;

use pame_core::{EquationProblem, Model, Observer};

use crate::equation::{Action, Config, Solution, Status, evaluate};

/// Finds a root of the equation using bisection.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, or if the model or problem
/// fails (or yields a non-finite residual) during evaluation.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    let [low, high] = bracket;
    let mut bracket = Bracket::new(bracket).map_err(|reason| Error::InvalidBracket {
        low,
        high,
        reason,
    })?;

    let low_eval = evaluate(model, problem, bracket.low())?;
    let mut low_residual = low_eval.residual;
    let mut last = low_eval;

    for iter in 1..=config.max_iters() {
        let mid = bracket.midpoint();
        let mid_eval = evaluate(model, problem, mid)?;

        let event = Event {
            iter,
            bracket: bracket.as_array(),
            eval: &mid_eval,
        };

        match observer.observe(&event) {
            Some(Action::StopEarly) => {
                return Ok(Solution::from_eval(
                    mid_eval,
                    Status::StoppedByObserver,
                    iter,
                ));
            }
            None => {}
        }

        if config.is_converged(mid_eval.residual) {
            return Ok(Solution::from_eval(mid_eval, Status::Converged, iter));
        }

        if low_residual * mid_eval.residual > 0.0 {
            bracket.keep_upper(mid);
            low_residual = mid_eval.residual;
        } else {
            bracket.keep_lower(mid);
        }

        last = mid_eval;
    }

    Ok(Solution::from_eval(last, Status::MaxIters, config.max_iters()))
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, or if the model or problem
/// fails during evaluation.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    solve(model, problem, bracket, config, ())
}
