use thiserror::Error;

use pame_solvers::equation::{ConfigError, root};

/// Errors from building physical inputs or solving for equilibrium.
#[derive(Debug, Error)]
pub enum Error {
    #[error("temperature must be finite and positive, got {kelvin} K")]
    Temperature { kelvin: f64 },

    #[error("conduction band ({conduction} eV) must lie above valence band ({valence} eV)")]
    BandOrder { conduction: f64, valence: f64 },

    #[error("{name} must be finite and positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("{name} must be finite and non-negative, got {value}")]
    Negative { name: &'static str, value: f64 },

    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("unknown material: {name:?}")]
    UnknownMaterial { name: String },

    #[error("invalid solver settings")]
    Config(#[from] ConfigError),

    #[error("root search failed")]
    Solver(#[from] root::Error),
}

impl Error {
    pub(crate) fn check_positive(name: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(Self::NonPositive { name, value })
        }
    }

    pub(crate) fn check_non_negative(name: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() && value >= 0.0 {
            Ok(value)
        } else {
            Err(Self::Negative { name, value })
        }
    }

    pub(crate) fn check_finite(name: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::NonFinite { name, value })
        }
    }

    pub(crate) fn check_temperature(kelvin: f64) -> Result<f64, Self> {
        if kelvin.is_finite() && kelvin > 0.0 {
            Ok(kelvin)
        } else {
            Err(Self::Temperature { kelvin })
        }
    }
}
