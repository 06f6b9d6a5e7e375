use std::error::Error as StdError;

use thiserror::Error;

use crate::equation::{ConfigError, bisection, open};

use super::Method;

/// Errors returned by the root dispatcher.
///
/// Solver-specific errors are flattened into this enum so callers can
/// match on a failure without knowing which solver ran.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid bracket [{low}, {high}]: {reason}")]
    InvalidBracket {
        low: f64,
        high: f64,
        reason: bisection::BracketError,
    },

    #[error("secant step is zero at x = {x}")]
    ZeroStepDelta { x: f64 },

    #[error("{method} did not converge after {iters} iterations (x = {x}, residual = {residual})")]
    DidNotConverge {
        method: Method,
        iters: usize,
        x: f64,
        residual: f64,
    },

    #[error("{method} was stopped by an observer after {iters} iterations")]
    StoppedByObserver { method: Method, iters: usize },

    #[error("unknown method: {name:?}")]
    UnknownMethod { name: String },

    #[error("{method} requires a derivative")]
    MissingDerivative { method: Method },

    #[error("{method} cannot start from a {start}")]
    StartMismatch { method: Method, start: &'static str },

    #[error("unusable derivative {derivative} at x = {x}")]
    InvalidDerivative { x: f64, derivative: f64 },

    #[error("secant is flat: residual {residual} at both x = {x0} and x = {x1}")]
    FlatSecant { x0: f64, x1: f64, residual: f64 },

    #[error("non-finite residual {residual} at x = {x}")]
    NonFiniteResidual { x: f64, residual: f64 },

    #[error("invalid solver config")]
    InvalidConfig(#[from] ConfigError),

    #[error("model call failed")]
    Model(#[source] Box<dyn StdError + Send + Sync>),

    #[error("problem error")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),
}

impl From<bisection::Error> for Error {
    fn from(err: bisection::Error) -> Self {
        match err {
            bisection::Error::InvalidBracket { low, high, reason } => {
                Self::InvalidBracket { low, high, reason }
            }
            bisection::Error::NonFiniteResidual { x, residual } => {
                Self::NonFiniteResidual { x, residual }
            }
            bisection::Error::Model(e) => Self::Model(e),
            bisection::Error::Problem(e) => Self::Problem(e),
        }
    }
}

impl From<open::Error> for Error {
    fn from(err: open::Error) -> Self {
        match err {
            open::Error::InvalidDerivative { x, derivative } => {
                Self::InvalidDerivative { x, derivative }
            }
            open::Error::ZeroStepDelta { x } => Self::ZeroStepDelta { x },
            open::Error::FlatSecant { x0, x1, residual } => Self::FlatSecant { x0, x1, residual },
            open::Error::NonFiniteResidual { x, residual } => {
                Self::NonFiniteResidual { x, residual }
            }
            open::Error::Model(e) => Self::Model(e),
            open::Error::Problem(e) => Self::Problem(e),
        }
    }
}
