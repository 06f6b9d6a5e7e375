//! Thermal energy and effective densities of states.

use std::f64::consts::PI;

use uom::si::{
    energy::electronvolt,
    f64::{Energy, ThermodynamicTemperature},
    thermodynamic_temperature::kelvin,
};

use crate::constants::{BOLTZMANN, BOLTZMANN_EV, ELECTRON_MASS, PLANCK};

/// Returns `kT` at the given temperature.
#[must_use]
pub fn thermal_energy(temperature: ThermodynamicTemperature) -> Energy {
    Energy::new::<electronvolt>(thermal_energy_ev(temperature.get::<kelvin>()))
}

/// Returns the effective density of states in cm⁻³ for a band with the
/// given density-of-states mass (in units of the free electron mass).
///
/// ```text
/// N = 2 (2π m* m0 k T / h²)^{3/2}
/// ```
#[must_use]
pub fn effective_density_of_states(mass_ratio: f64, temperature: ThermodynamicTemperature) -> f64 {
    effective_density_of_states_at(mass_ratio, temperature.get::<kelvin>())
}

pub(crate) fn thermal_energy_ev(temperature_k: f64) -> f64 {
    BOLTZMANN_EV * temperature_k
}

pub(crate) fn effective_density_of_states_at(mass_ratio: f64, temperature_k: f64) -> f64 {
    let mass = mass_ratio * ELECTRON_MASS;
    let per_cubic_meter = 2.0 * (2.0 * PI * mass * BOLTZMANN * temperature_k / (PLANCK * PLANCK)).powf(1.5);
    per_cubic_meter * 1e-6
}
