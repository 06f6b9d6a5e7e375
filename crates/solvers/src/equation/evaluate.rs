use thiserror::Error;

use pame_core::{DerivativeProblem, EquationProblem, Model, Snapshot};

/// The result of evaluating a scalar equation problem at a given `x`.
#[derive(Debug, Clone)]
pub struct Evaluation<I, O> {
    pub x: f64,
    pub residual: f64,
    pub snapshot: Snapshot<I, O>,
}

/// Errors that can occur when evaluating an equation problem.
#[derive(Debug, Error)]
pub enum EvalError<ME, PE> {
    /// The model call failed.
    #[error("model call failed")]
    Model(#[source] ME),

    /// Failed to construct input or compute the residual.
    #[error("problem error")]
    Problem(#[source] PE),

    /// The residual came back as NaN or infinite.
    #[error("non-finite residual {residual} at x = {x}")]
    NonFiniteResidual { x: f64, residual: f64 },
}

/// Type alias for the result of [`evaluate`].
pub type EvaluateResult<M, P> = Result<
    Evaluation<<M as Model>::Input, <M as Model>::Output>,
    EvalError<<M as Model>::Error, <P as EquationProblem<1>>::Error>,
>;

/// Evaluates the model in the context of a scalar equation problem.
///
/// Maps `x` to a model input, calls the model, then computes the residual
/// from the input and output.
///
/// # Errors
///
/// Returns an error if input mapping, the model call, or residual
/// computation fails, or if the residual is not finite.
pub fn evaluate<M, P>(model: &M, problem: &P, x: f64) -> EvaluateResult<M, P>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    let input = problem.input(&[x]).map_err(EvalError::Problem)?;
    let output = model.call(&input).map_err(EvalError::Model)?;
    let [residual] = problem
        .residuals(&input, &output)
        .map_err(EvalError::Problem)?;

    if !residual.is_finite() {
        return Err(EvalError::NonFiniteResidual { x, residual });
    }

    Ok(Evaluation {
        x,
        residual,
        snapshot: Snapshot::new(input, output),
    })
}

/// Computes the residual slope at an existing evaluation.
pub(crate) fn slope<P>(problem: &P, eval: &Evaluation<P::Input, P::Output>) -> Result<f64, P::Error>
where
    P: DerivativeProblem,
{
    problem.derivative(&eval.snapshot.input, &eval.snapshot.output)
}
