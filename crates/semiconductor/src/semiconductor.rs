#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use uom::si::{
    energy::electronvolt,
    f64::{Energy, ThermodynamicTemperature},
    thermodynamic_temperature::kelvin,
};

use crate::{
    Error, Material,
    density::{effective_density_of_states_at, thermal_energy_ev},
};

/// Band structure and temperature of an undoped crystal.
///
/// Construction validates the parameters, so every `Semiconductor` has a
/// positive temperature, positive effective masses, and a conduction band
/// above its valence band.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Semiconductor {
    conduction_band: Energy,
    valence_band: Energy,
    electron_mass: f64,
    hole_mass: f64,
    temperature: ThermodynamicTemperature,
}

impl Semiconductor {
    /// Creates a semiconductor from explicit band edges.
    ///
    /// # Errors
    ///
    /// Returns an error if a band edge is not finite, the conduction band
    /// does not lie above the valence band, an effective mass is not
    /// positive, or the temperature is not positive.
    pub fn new(
        conduction_band: Energy,
        valence_band: Energy,
        electron_mass: f64,
        hole_mass: f64,
        temperature: ThermodynamicTemperature,
    ) -> Result<Self, Error> {
        let ec = Error::check_finite("conduction band", conduction_band.get::<electronvolt>())?;
        let ev = Error::check_finite("valence band", valence_band.get::<electronvolt>())?;
        if ec <= ev {
            return Err(Error::BandOrder {
                conduction: ec,
                valence: ev,
            });
        }
        Error::check_positive("electron mass", electron_mass)?;
        Error::check_positive("hole mass", hole_mass)?;
        Error::check_temperature(temperature.get::<kelvin>())?;

        Ok(Self {
            conduction_band,
            valence_band,
            electron_mass,
            hole_mass,
            temperature,
        })
    }

    /// Creates a semiconductor from a material preset, with the valence
    /// band at 0 eV and the conduction band at the band gap.
    ///
    /// # Errors
    ///
    /// See [`Semiconductor::new`].
    pub fn from_material(
        material: &Material,
        temperature: ThermodynamicTemperature,
    ) -> Result<Self, Error> {
        Self::new(
            material.band_gap,
            Energy::new::<electronvolt>(0.0),
            material.electron_mass,
            material.hole_mass,
            temperature,
        )
    }

    /// Returns a copy at a different temperature.
    ///
    /// # Errors
    ///
    /// Returns an error if the temperature is not positive.
    pub fn at_temperature(self, temperature: ThermodynamicTemperature) -> Result<Self, Error> {
        Error::check_temperature(temperature.get::<kelvin>())?;
        Ok(Self {
            temperature,
            ..self
        })
    }

    #[must_use]
    pub fn conduction_band(&self) -> Energy {
        self.conduction_band
    }

    #[must_use]
    pub fn valence_band(&self) -> Energy {
        self.valence_band
    }

    #[must_use]
    pub fn band_gap(&self) -> Energy {
        self.conduction_band - self.valence_band
    }

    #[must_use]
    pub fn electron_mass(&self) -> f64 {
        self.electron_mass
    }

    #[must_use]
    pub fn hole_mass(&self) -> f64 {
        self.hole_mass
    }

    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        self.temperature
    }

    /// Returns `kT`.
    #[must_use]
    pub fn thermal_energy(&self) -> Energy {
        Energy::new::<electronvolt>(self.kt())
    }

    /// Returns the conduction band effective density of states `Nc` in cm⁻³.
    #[must_use]
    pub fn conduction_density(&self) -> f64 {
        effective_density_of_states_at(self.electron_mass, self.kelvin())
    }

    /// Returns the valence band effective density of states `Nv` in cm⁻³.
    #[must_use]
    pub fn valence_density(&self) -> f64 {
        effective_density_of_states_at(self.hole_mass, self.kelvin())
    }

    /// Returns the intrinsic Fermi level.
    ///
    /// ```text
    /// Ei = (Ec + Ev) / 2 + ¾ kT ln(mh / me)
    /// ```
    #[must_use]
    pub fn intrinsic_level(&self) -> Energy {
        let midgap = 0.5 * (self.ec() + self.ev());
        let shift = 0.75 * self.kt() * (self.hole_mass / self.electron_mass).ln();
        Energy::new::<electronvolt>(midgap + shift)
    }

    /// Returns the intrinsic carrier concentration `√(Nc Nv) exp(−Eg / 2kT)`
    /// in cm⁻³.
    #[must_use]
    pub fn intrinsic_concentration(&self) -> f64 {
        let gap = self.ec() - self.ev();
        (self.conduction_density() * self.valence_density()).sqrt() * (-gap / (2.0 * self.kt())).exp()
    }

    pub(crate) fn ec(&self) -> f64 {
        self.conduction_band.get::<electronvolt>()
    }

    pub(crate) fn ev(&self) -> f64 {
        self.valence_band.get::<electronvolt>()
    }

    pub(crate) fn kelvin(&self) -> f64 {
        self.temperature.get::<kelvin>()
    }

    pub(crate) fn kt(&self) -> f64 {
        thermal_energy_ev(self.kelvin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn silicon() -> Semiconductor {
        Semiconductor::from_material(
            &Material::silicon(),
            ThermodynamicTemperature::new::<kelvin>(300.0),
        )
        .unwrap()
    }

    #[test]
    fn silicon_band_edges() {
        let si = silicon();

        assert_relative_eq!(si.ec(), 1.12, max_relative = 1e-12);
        assert_eq!(si.ev(), 0.0);
        assert_relative_eq!(si.band_gap().get::<electronvolt>(), 1.12, max_relative = 1e-12);
    }

    #[test]
    fn intrinsic_level_shifts_towards_the_lighter_band() {
        let si = silicon();
        let ei = si.intrinsic_level().get::<electronvolt>();

        // mh > me pushes the level above midgap.
        assert!(ei > 0.56);
        assert_relative_eq!(ei, 0.56 + 0.75 * si.kt() * (0.81_f64 / 0.35).ln(), epsilon = 1e-9);
    }

    #[test]
    fn intrinsic_concentration_matches_mass_action() {
        let si = silicon();
        let ni = si.intrinsic_concentration();

        // Order of magnitude for these masses.
        assert!(ni > 1e9 && ni < 1e10, "ni = {ni}");
    }

    #[test]
    fn rejects_invalid_parameters() {
        let t = ThermodynamicTemperature::new::<kelvin>(300.0);
        let ev = |value: f64| Energy::new::<electronvolt>(value);

        assert!(matches!(
            Semiconductor::new(ev(0.0), ev(1.0), 0.3, 0.5, t),
            Err(Error::BandOrder { .. })
        ));
        assert!(matches!(
            Semiconductor::new(ev(1.0), ev(0.0), 0.0, 0.5, t),
            Err(Error::NonPositive { name: "electron mass", .. })
        ));
        assert!(matches!(
            Semiconductor::new(ev(1.0), ev(0.0), 0.3, 0.5, ThermodynamicTemperature::new::<kelvin>(0.0)),
            Err(Error::Temperature { .. })
        ));
        assert!(matches!(
            silicon().at_temperature(ThermodynamicTemperature::new::<kelvin>(-5.0)),
            Err(Error::Temperature { .. })
        ));
    }
}
