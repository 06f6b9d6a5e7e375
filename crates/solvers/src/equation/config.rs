use thiserror::Error;

/// Configuration shared by the equation solvers.
///
/// `delta` is only read by the secant method when it has to synthesize its
/// second starting point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    residual_tol: f64,
    delta: f64,
}

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("residual_tol must be finite and positive")]
    ResidualTol,

    #[error("delta must be finite")]
    Delta,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 1000,
            residual_tol: 1e-7,
            delta: 1e-3,
        }
    }
}

impl Config {
    /// Creates a config with the default secant `delta`.
    ///
    /// # Errors
    ///
    /// Returns an error if `residual_tol` is not finite and positive.
    pub fn new(max_iters: usize, residual_tol: f64) -> Result<Self, ConfigError> {
        if !residual_tol.is_finite() || residual_tol <= 0.0 {
            return Err(ConfigError::ResidualTol);
        }

        Ok(Self {
            max_iters,
            residual_tol,
            ..Self::default()
        })
    }

    /// Returns a copy of this config with a different secant `delta`.
    ///
    /// A zero `delta` is accepted here and rejected by the secant solver,
    /// which is the only place it matters.
    ///
    /// # Errors
    ///
    /// Returns an error if `delta` is not finite.
    pub fn with_delta(self, delta: f64) -> Result<Self, ConfigError> {
        if !delta.is_finite() {
            return Err(ConfigError::Delta);
        }
        Ok(Self { delta, ..self })
    }

    /// Returns the iteration cap.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the residual tolerance.
    #[must_use]
    pub fn residual_tol(&self) -> f64 {
        self.residual_tol
    }

    /// Returns the secant step used to synthesize a second starting point.
    #[must_use]
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Returns true if `residual` satisfies the tolerance.
    #[must_use]
    pub fn is_converged(&self, residual: f64) -> bool {
        residual.abs() < self.residual_tol
    }
}
