//! Shared driver for the open (non-bracketing) methods.
//!
//! Newton, chord and secant differ only in how they pick the next iterate
//! from the current evaluation. [`iterate`] owns everything else: the
//! iteration cap, observation, and convergence, so each method supplies
//! just a `step` closure.

use std::error::Error as StdError;

use thiserror::Error;

use pame_core::{EquationProblem, Model, Observer};

use super::{Action, Config, EvalError, Evaluation, Solution, Status, evaluate};

/// Iteration event emitted by the open methods.
///
/// One event is emitted per iterate, starting with the initial point
/// (`iter == 0`), before the convergence check.
#[derive(Debug)]
pub struct Event<'a, I, O> {
    /// Number of steps taken to reach this iterate.
    pub iter: usize,

    /// Evaluation at the current iterate.
    pub eval: &'a Evaluation<I, O>,
}

impl<I, O> Event<'_, I, O> {
    /// Returns the current iterate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.eval.x
    }

    /// Returns the residual at the current iterate.
    #[must_use]
    pub fn residual(&self) -> f64 {
        self.eval.residual
    }
}

/// Errors that can occur in the Newton, chord, and secant solvers.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unusable derivative {derivative} at x = {x}")]
    InvalidDerivative { x: f64, derivative: f64 },

    #[error("secant step is zero: both starting points are {x}")]
    ZeroStepDelta { x: f64 },

    #[error("secant is flat: residual {residual} at both x = {x0} and x = {x1}")]
    FlatSecant { x0: f64, x1: f64, residual: f64 },

    #[error("non-finite residual {residual} at x = {x}")]
    NonFiniteResidual { x: f64, residual: f64 },

    #[error("model call failed")]
    Model(#[source] Box<dyn StdError + Send + Sync>),

    #[error("problem error")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(super) fn problem(err: impl StdError + Send + Sync + 'static) -> Self {
        Self::Problem(Box::new(err))
    }
}

impl<ME, PE> From<EvalError<ME, PE>> for Error
where
    ME: StdError + Send + Sync + 'static,
    PE: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<ME, PE>) -> Self {
        match err {
            EvalError::Model(e) => Self::Model(Box::new(e)),
            EvalError::Problem(e) => Self::Problem(Box::new(e)),
            EvalError::NonFiniteResidual { x, residual } => Self::NonFiniteResidual { x, residual },
        }
    }
}

/// Runs an open method from an already evaluated starting point.
///
/// `step` maps the current evaluation to the next iterate. It is only
/// called when the current iterate has not converged and the cap has not
/// been reached.
pub(super) fn iterate<M, P, Obs, S>(
    model: &M,
    problem: &P,
    start: Evaluation<M::Input, M::Output>,
    config: &Config,
    mut observer: Obs,
    mut step: S,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
    S: FnMut(&Evaluation<M::Input, M::Output>) -> Result<f64, Error>,
{
    let mut eval = start;
    let mut iter = 0;

    loop {
        let event = Event { iter, eval: &eval };
        match observer.observe(&event) {
            Some(Action::StopEarly) => {
                return Ok(Solution::from_eval(eval, Status::StoppedByObserver, iter));
            }
            None => {}
        }

        if config.is_converged(eval.residual) {
            return Ok(Solution::from_eval(eval, Status::Converged, iter));
        }

        if iter >= config.max_iters() {
            return Ok(Solution::from_eval(eval, Status::MaxIters, iter));
        }

        let next = step(&eval)?;
        eval = evaluate(model, problem, next)?;
        iter += 1;
    }
}

/// Rejects a slope that would produce an infinite or undefined step.
pub(super) fn check_derivative(x: f64, derivative: f64) -> Result<f64, Error> {
    if derivative == 0.0 || !derivative.is_finite() {
        return Err(Error::InvalidDerivative { x, derivative });
    }
    Ok(derivative)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_infinite_slopes_are_rejected() {
        assert!(matches!(
            check_derivative(1.0, 0.0),
            Err(Error::InvalidDerivative { x, .. }) if x == 1.0
        ));
        assert!(check_derivative(1.0, f64::INFINITY).is_err());
        assert!(check_derivative(1.0, f64::NAN).is_err());
        assert_eq!(check_derivative(1.0, -2.5).unwrap(), -2.5);
    }
}
