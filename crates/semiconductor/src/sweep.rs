//! Parallel parameter sweeps over the Fermi-level search.
//!
//! Every point is solved independently on the rayon thread pool. A point
//! that fails keeps its error in the result and is logged at `warn` level;
//! the rest of the sweep carries on.

use rayon::prelude::*;
use tracing::warn;
use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

use crate::{Dopant, Equilibrium, Error, SearchOptions, Semiconductor, find_fermi_level};

/// One point of a sweep: the swept value and the outcome at that value.
#[derive(Debug)]
pub struct SweepPoint {
    /// Concentration in cm⁻³ or temperature in K.
    pub value: f64,
    pub result: Result<Equilibrium, Error>,
}

impl SweepPoint {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Solves for the Fermi level at each dopant concentration.
///
/// Results come back in the order of `concentrations`.
pub fn sweep_concentrations(
    semiconductor: &Semiconductor,
    dopant: Dopant,
    concentrations: &[f64],
    options: &SearchOptions,
) -> Vec<SweepPoint> {
    concentrations
        .par_iter()
        .map(|&concentration| {
            let result =
                find_fermi_level(semiconductor, dopant.with_concentration(concentration), options);
            point("concentration", concentration, result)
        })
        .collect()
}

/// Solves for the Fermi level at each temperature, keeping the band
/// edges fixed.
///
/// Results come back in the order of `temperatures`.
pub fn sweep_temperatures(
    semiconductor: &Semiconductor,
    dopant: Dopant,
    temperatures: &[ThermodynamicTemperature],
    options: &SearchOptions,
) -> Vec<SweepPoint> {
    temperatures
        .par_iter()
        .map(|&temperature| {
            let result = semiconductor
                .at_temperature(temperature)
                .and_then(|heated| find_fermi_level(&heated, dopant, options));
            point("temperature", temperature.get::<kelvin>(), result)
        })
        .collect()
}

/// Returns `count` logarithmically spaced values from `start` to `stop`
/// inclusive.
///
/// # Errors
///
/// Returns an error if either endpoint is not finite and positive.
pub fn log_space(start: f64, stop: f64, count: usize) -> Result<Vec<f64>, Error> {
    let low = Error::check_positive("start", start)?.log10();
    let high = Error::check_positive("stop", stop)?.log10();

    Ok(match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (high - low) / (count - 1) as f64;
            (0..count)
                .map(|i| match i {
                    0 => start,
                    i if i == count - 1 => stop,
                    i => 10f64.powf(low + step * i as f64),
                })
                .collect()
        }
    })
}

fn point(parameter: &'static str, value: f64, result: Result<Equilibrium, Error>) -> SweepPoint {
    if let Err(error) = &result {
        warn!(parameter, value, %error, "sweep point failed");
    }
    SweepPoint { value, result }
}
