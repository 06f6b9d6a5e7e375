/// Defines an equation problem to be solved.
///
/// An equation problem maps solver variables to a model input, then computes
/// residuals from the model input and output. Solvers search for the input
/// that drives every residual to zero.
///
/// The const generic `N` is the number of solver variables and residuals.
/// Every solver in this workspace is scalar, so `N = 1` throughout.
pub trait EquationProblem<const N: usize> {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Maps solver variables (`x`) into a model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be constructed from `x`.
    fn input(&self, x: &[f64; N]) -> Result<Self::Input, Self::Error>;

    /// Computes residuals from model input/output.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the residuals cannot be computed.
    fn residuals(&self, input: &Self::Input, output: &Self::Output)
    -> Result<[f64; N], Self::Error>;
}

/// A scalar equation problem whose residual slope is known analytically.
///
/// Newton's method needs the slope at every iterate; the chord method needs
/// it once, at the starting point.
pub trait DerivativeProblem: EquationProblem<1> {
    /// Computes `d(residual)/dx` at the point described by `input`/`output`.
    ///
    /// # Errors
    ///
    /// Returns [`EquationProblem::Error`] if the slope cannot be computed.
    fn derivative(&self, input: &Self::Input, output: &Self::Output) -> Result<f64, Self::Error>;
}
