use std::error::Error as StdError;

use thiserror::Error;

use crate::equation::EvalError;

use super::BracketError;

/// Errors that can occur during bisection solving.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid bracket [{low}, {high}]: {reason}")]
    InvalidBracket {
        low: f64,
        high: f64,
        reason: BracketError,
    },

    #[error("non-finite residual {residual} at x = {x}")]
    NonFiniteResidual { x: f64, residual: f64 },

    #[error("model call failed")]
    Model(#[source] Box<dyn StdError + Send + Sync>),

    #[error("problem error")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),
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
