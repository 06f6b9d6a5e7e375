//! Abrupt p-n junction formulas in the depletion approximation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use uom::si::{
    electric_potential::volt,
    energy::electronvolt,
    f64::{ElectricPotential, Energy, ThermodynamicTemperature},
    thermodynamic_temperature::kelvin,
};

use crate::{
    Diffusion, Equilibrium, Error, Semiconductor,
    constants::{ELEMENTARY_CHARGE, VACUUM_PERMITTIVITY},
    density::thermal_energy_ev,
};

/// Depletion layer widths in cm.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DepletionWidths {
    pub total: f64,
    /// Extent into the n side.
    pub n_side: f64,
    /// Extent into the p side.
    pub p_side: f64,
}

/// Saturation current densities of an ideal diode, in A/cm².
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JunctionCurrent {
    /// `jn + jp`.
    pub js: f64,
    /// Electrons diffusing out of the p side.
    pub jn: f64,
    /// Holes diffusing out of the n side.
    pub jp: f64,
}

/// Returns the extrinsic Debye length in cm.
///
/// ```text
/// L = √(ε ε0 k T / (q² N))
/// ```
///
/// # Errors
///
/// Returns an error if the permittivity or concentration is not positive or
/// the temperature is invalid.
pub fn debye_length(
    permittivity: f64,
    concentration: f64,
    temperature: ThermodynamicTemperature,
) -> Result<f64, Error> {
    let permittivity = Error::check_positive("permittivity", permittivity)?;
    let concentration = Error::check_positive("concentration", concentration)?;
    let kt = thermal_energy_ev(Error::check_temperature(temperature.get::<kelvin>())?);

    Ok((permittivity * VACUUM_PERMITTIVITY * kt / (ELEMENTARY_CHARGE * concentration)).sqrt())
}

/// Returns the depletion widths of an unbiased abrupt junction.
///
/// ```text
/// W  = √(2 ε ε0 Vbi (Na + Nd) / (q Na Nd))
/// xn = W Na / (Na + Nd)
/// xp = W Nd / (Na + Nd)
/// ```
///
/// # Errors
///
/// Returns an error if the built-in potential, the permittivity or either
/// concentration is not positive.
pub fn depletion_widths(
    built_in: Energy,
    permittivity: f64,
    donor_concentration: f64,
    acceptor_concentration: f64,
) -> Result<DepletionWidths, Error> {
    let vbi = Error::check_positive("built-in potential", built_in.get::<electronvolt>())?;
    let permittivity = Error::check_positive("permittivity", permittivity)?;
    let nd = Error::check_positive("donor concentration", donor_concentration)?;
    let na = Error::check_positive("acceptor concentration", acceptor_concentration)?;

    let sum = na + nd;
    let total = (2.0 * permittivity * VACUUM_PERMITTIVITY * vbi * sum / (ELEMENTARY_CHARGE * na * nd))
        .sqrt();

    Ok(DepletionWidths {
        total,
        n_side: total * na / sum,
        p_side: total * nd / sum,
    })
}

/// Returns the built-in potential between two equilibria of the same
/// crystal, as the difference of their Fermi levels.
#[must_use]
pub fn built_in_potential(n_side: &Equilibrium, p_side: &Equilibrium) -> Energy {
    n_side.fermi_level - p_side.fermi_level
}

/// Returns the saturation current density of an abrupt junction.
///
/// ```text
/// np0 = ni² / Na,   pn0 = ni² / Nd
/// jn  = q Dn np0 / Ln
/// jp  = q Dp pn0 / Lp
/// ```
///
/// `ni` is taken from `semiconductor` at its temperature.
///
/// # Errors
///
/// Returns an error if a concentration or diffusion parameter is not
/// positive.
pub fn saturation_current(
    semiconductor: &Semiconductor,
    diffusion: &Diffusion,
    donor_concentration: f64,
    acceptor_concentration: f64,
) -> Result<JunctionCurrent, Error> {
    let nd = Error::check_positive("donor concentration", donor_concentration)?;
    let na = Error::check_positive("acceptor concentration", acceptor_concentration)?;
    let dn = Error::check_positive("electron diffusivity", diffusion.electron_diffusivity)?;
    let dp = Error::check_positive("hole diffusivity", diffusion.hole_diffusivity)?;
    let ln = Error::check_positive("electron diffusion length", diffusion.electron_length)?;
    let lp = Error::check_positive("hole diffusion length", diffusion.hole_length)?;

    let ni = semiconductor.intrinsic_concentration();
    let ni2 = ni * ni;

    let jn = ELEMENTARY_CHARGE * dn * (ni2 / na) / ln;
    let jp = ELEMENTARY_CHARGE * dp * (ni2 / nd) / lp;

    Ok(JunctionCurrent {
        js: jn + jp,
        jn,
        jp,
    })
}

/// Returns the ideal-diode current in A through a junction of `area` cm².
///
/// ```text
/// I = js S (exp(qV / kT) − 1)
/// ```
///
/// # Errors
///
/// Returns an error if `saturation` is negative, `area` is not positive,
/// the bias is not finite, or the temperature is invalid.
pub fn diode_current(
    saturation: f64,
    area: f64,
    bias: ElectricPotential,
    temperature: ThermodynamicTemperature,
) -> Result<f64, Error> {
    let js = Error::check_non_negative("saturation current", saturation)?;
    let area = Error::check_positive("area", area)?;
    let bias = Error::check_finite("bias", bias.get::<volt>())?;
    let kt = thermal_energy_ev(Error::check_temperature(temperature.get::<kelvin>())?);

    Ok(js * area * (bias / kt).exp_m1())
}

/// Samples the current-voltage characteristic at each bias.
///
/// # Errors
///
/// See [`diode_current`].
pub fn current_voltage(
    saturation: f64,
    area: f64,
    biases: &[ElectricPotential],
    temperature: ThermodynamicTemperature,
) -> Result<Vec<(ElectricPotential, f64)>, Error> {
    biases
        .iter()
        .map(|&bias| Ok((bias, diode_current(saturation, area, bias, temperature)?)))
        .collect()
}
