use pame_solvers::equation::{
    Config,
    root::{Method, Start},
};

use crate::Error;

/// How to run a root search over a physical residual.
///
/// Leaving the tolerance or the start unset lets each problem pick its own
/// default: a relative tolerance of `1e-4` for the Fermi level and an
/// absolute `1e-7` for band bending, with starts derived from the physics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOptions {
    method: Method,
    max_iters: usize,
    tolerance: Option<f64>,
    delta: f64,
    start: Option<Start>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self::new(Method::Bisection)
    }
}

impl SearchOptions {
    /// Creates options for a method with default settings.
    #[must_use]
    pub fn new(method: Method) -> Self {
        let defaults = Config::default();
        Self {
            method,
            max_iters: defaults.max_iters(),
            tolerance: None,
            delta: defaults.delta(),
            start: None,
        }
    }

    /// Overrides the residual tolerance.
    #[must_use]
    pub fn tolerance(self, tolerance: f64) -> Self {
        Self {
            tolerance: Some(tolerance),
            ..self
        }
    }

    /// Overrides the iteration cap.
    #[must_use]
    pub fn max_iters(self, max_iters: usize) -> Self {
        Self { max_iters, ..self }
    }

    /// Overrides the secant step, in eV.
    #[must_use]
    pub fn delta(self, delta: f64) -> Self {
        Self { delta, ..self }
    }

    /// Overrides the starting bracket or point, in eV.
    #[must_use]
    pub fn start(self, start: Start) -> Self {
        Self {
            start: Some(start),
            ..self
        }
    }

    #[must_use]
    pub fn method(&self) -> Method {
        self.method
    }

    pub(crate) fn start_or(&self, default: impl FnOnce() -> Start) -> Start {
        self.start.unwrap_or_else(default)
    }

    pub(crate) fn config(&self, default_tolerance: f64) -> Result<Config, Error> {
        let tolerance = self.tolerance.unwrap_or(default_tolerance);
        Ok(Config::new(self.max_iters, tolerance)?.with_delta(self.delta)?)
    }
}
