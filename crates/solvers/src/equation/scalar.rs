use std::convert::Infallible;

use pame_core::{DerivativeProblem, EquationProblem, Model};

/// Marker for a [`ScalarFn`] without an analytic derivative.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDerivative;

/// Adapts plain closures to the model/problem pair the solvers expect.
///
/// The same value acts as both the [`Model`] (`x ↦ f(x)`) and the
/// [`EquationProblem`] (`residual = f(x)`), so it is passed twice:
///
/// ```
/// use pame_solvers::equation::{Config, ScalarFn, bisection};
///
/// let f = ScalarFn::new(|x: f64| x * x - 2.0);
/// let solution = bisection::solve_unobserved(&f, &f, [0.0, 2.0], &Config::default())?;
/// assert!((solution.x - 2.0_f64.sqrt()).abs() < 1e-7);
/// # Ok::<(), pame_solvers::equation::bisection::Error>(())
/// ```
///
/// Attaching a derivative with [`ScalarFn::with_derivative`] makes it a
/// [`DerivativeProblem`] as well.
#[derive(Debug, Clone, Copy)]
pub struct ScalarFn<F, D = NoDerivative> {
    residual: F,
    derivative: D,
}

impl<F> ScalarFn<F>
where
    F: Fn(f64) -> f64,
{
    /// Wraps a residual closure.
    pub fn new(residual: F) -> Self {
        Self {
            residual,
            derivative: NoDerivative,
        }
    }
}

impl<F, D> ScalarFn<F, D> {
    /// Attaches an analytic derivative of the residual.
    pub fn with_derivative<G>(self, derivative: G) -> ScalarFn<F, G>
    where
        G: Fn(f64) -> f64,
    {
        ScalarFn {
            residual: self.residual,
            derivative,
        }
    }
}

impl<F, D> Model for ScalarFn<F, D>
where
    F: Fn(f64) -> f64,
{
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &f64) -> Result<f64, Self::Error> {
        Ok((self.residual)(*input))
    }
}

impl<F, D> EquationProblem<1> for ScalarFn<F, D>
where
    F: Fn(f64) -> f64,
{
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(x[0])
    }

    fn residuals(&self, _input: &f64, output: &f64) -> Result<[f64; 1], Self::Error> {
        Ok([*output])
    }
}

impl<F, D> DerivativeProblem for ScalarFn<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    fn derivative(&self, input: &f64, _output: &f64) -> Result<f64, Self::Error> {
        Ok((self.derivative)(*input))
    }
}
