use std::convert::Infallible;

use pame_core::{DerivativeProblem, EquationProblem, Model};
use uom::si::{energy::electronvolt, f64::Energy};

use crate::{Dopant, Error, Semiconductor};

/// Charge neutrality of a doped crystal as a function of the Fermi level.
///
/// Acts as both the [`Model`] (Fermi level in eV ↦ [`Carriers`]) and the
/// equation problem whose residual is the relative charge imbalance:
///
/// ```text
/// Q = n + Na⁻ − p − Nd⁺
/// donor:    r = Q / (p + Nd⁺)
/// acceptor: r = Q / (n + Na⁻)
/// ```
///
/// Both residuals increase with the Fermi level, so a bracket
/// `[Ev, Ec]` has the residual negative at `Ev` whenever the equilibrium
/// level lies inside the gap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChargeBalance {
    dopant: Dopant,
    conduction_band: f64,
    valence_band: f64,
    dopant_level: f64,
    kt: f64,
    nc: f64,
    nv: f64,
}

/// Carrier and charge densities at one Fermi level, all in cm⁻³.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Carriers {
    /// Free electrons `n`.
    pub electrons: f64,
    /// Free holes `p`.
    pub holes: f64,
    /// Ionized dopants (`Nd⁺` or `Na⁻`).
    pub ionized: f64,
    /// Net negative charge `Q`.
    pub net_charge: f64,
    /// Normalizing density for the residual.
    pub scale: f64,
}

impl Carriers {
    /// Returns the relative imbalance `Q / scale`.
    #[must_use]
    pub fn imbalance(&self) -> f64 {
        self.net_charge / self.scale
    }
}

impl ChargeBalance {
    /// Builds the balance for a crystal and dopant.
    ///
    /// # Errors
    ///
    /// Returns an error if the dopant has a negative concentration or
    /// ionization energy.
    pub fn new(semiconductor: &Semiconductor, dopant: Dopant) -> Result<Self, Error> {
        dopant.validate()?;

        let conduction_band = semiconductor.ec();
        let valence_band = semiconductor.ev();

        Ok(Self {
            dopant,
            conduction_band,
            valence_band,
            dopant_level: dopant.level(conduction_band, valence_band),
            kt: semiconductor.kt(),
            nc: semiconductor.conduction_density(),
            nv: semiconductor.valence_density(),
        })
    }

    #[must_use]
    pub fn dopant(&self) -> Dopant {
        self.dopant
    }

    /// Returns the donor or acceptor level.
    #[must_use]
    pub fn dopant_level(&self) -> Energy {
        Energy::new::<electronvolt>(self.dopant_level)
    }

    /// Returns `Nc` in cm⁻³.
    #[must_use]
    pub fn conduction_density(&self) -> f64 {
        self.nc
    }

    /// Returns `Nv` in cm⁻³.
    #[must_use]
    pub fn valence_density(&self) -> f64 {
        self.nv
    }

    /// Computes the carrier densities at a Fermi level in eV.
    #[must_use]
    pub fn carriers(&self, fermi_level: f64) -> Carriers {
        let kt = self.kt;
        let electrons = self.nc * ((fermi_level - self.conduction_band) / kt).exp();
        let holes = self.nv * ((self.valence_band - fermi_level) / kt).exp();
        let ionized = self.dopant.concentration()
            * self.dopant.ionized_fraction(fermi_level, self.dopant_level, kt);

        let (net_charge, scale) = match self.dopant {
            Dopant::Donor { .. } => (electrons - holes - ionized, holes + ionized),
            Dopant::Acceptor { .. } => (electrons + ionized - holes, electrons + ionized),
        };

        Carriers {
            electrons,
            holes,
            ionized,
            net_charge,
            scale,
        }
    }

    /// Returns the residual at a Fermi level in eV.
    #[must_use]
    pub fn residual(&self, fermi_level: f64) -> f64 {
        self.carriers(fermi_level).imbalance()
    }

    /// Returns `dr/dEf` from the carriers at a Fermi level.
    ///
    /// With `f` the ionized fraction, `dNd⁺/dEf = −Nd f (1 − f) / kT` and
    /// `dNa⁻/dEf = Na f (1 − f) / kT`.
    #[must_use]
    pub fn slope(&self, carriers: &Carriers) -> f64 {
        let kt = self.kt;
        let dn = carriers.electrons / kt;
        let dp = -carriers.holes / kt;

        let total = self.dopant.concentration();
        let fraction = if total > 0.0 {
            carriers.ionized / total
        } else {
            0.0
        };
        let ionizing = total * fraction * (1.0 - fraction) / kt;

        let (dq, dscale) = match self.dopant {
            Dopant::Donor { .. } => (dn - dp + ionizing, dp - ionizing),
            Dopant::Acceptor { .. } => (dn + ionizing - dp, dn + ionizing),
        };

        let Carriers {
            net_charge: q,
            scale,
            ..
        } = *carriers;
        (dq * scale - q * dscale) / (scale * scale)
    }
}

impl Model for ChargeBalance {
    type Input = f64;
    type Output = Carriers;
    type Error = Infallible;

    fn call(&self, fermi_level: &f64) -> Result<Carriers, Self::Error> {
        Ok(self.carriers(*fermi_level))
    }
}

impl EquationProblem<1> for ChargeBalance {
    type Input = f64;
    type Output = Carriers;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(x[0])
    }

    fn residuals(&self, _input: &f64, output: &Carriers) -> Result<[f64; 1], Self::Error> {
        Ok([output.imbalance()])
    }
}

impl DerivativeProblem for ChargeBalance {
    fn derivative(&self, _input: &f64, output: &Carriers) -> Result<f64, Self::Error> {
        Ok(self.slope(output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

    use crate::Material;

    fn balance(dopant: fn(f64, Energy) -> Dopant) -> ChargeBalance {
        let si = Material::silicon();
        let crystal =
            Semiconductor::from_material(&si, ThermodynamicTemperature::new::<kelvin>(300.0))
                .unwrap();
        ChargeBalance::new(&crystal, dopant(1e16, si.donor_ionization)).unwrap()
    }

    #[test]
    fn donor_residual_is_increasing_across_the_gap() {
        let balance = balance(Dopant::donor);
        let residuals: Vec<f64> = (0..=56).map(|i| balance.residual(0.02 * f64::from(i))).collect();

        assert!(residuals[0] < 0.0);
        assert!(residuals[56] > 0.0);
        // Saturated ends round to exactly ±1, so only monotonicity is checked.
        assert!(residuals.windows(2).all(|pair| pair[1] >= pair[0]));
    }

    #[test]
    fn acceptor_residual_is_increasing_across_the_gap() {
        let balance = balance(Dopant::acceptor);
        let residuals: Vec<f64> = (0..=56).map(|i| balance.residual(0.02 * f64::from(i))).collect();

        assert!(residuals[0] < 0.0);
        assert!(residuals[56] > 0.0);
        assert!(residuals.windows(2).all(|pair| pair[1] >= pair[0]));
    }

    #[test]
    fn acceptor_charge_counts_electrons_and_ionized_acceptors_as_negative() {
        let balance = balance(Dopant::acceptor);
        let c = balance.carriers(0.3);

        assert_relative_eq!(c.net_charge, c.electrons + c.ionized - c.holes);
        assert_relative_eq!(c.scale, c.electrons + c.ionized);
    }

    #[test]
    fn analytic_slope_matches_central_difference() {
        // Points where the residual is not saturated at ±1.
        let cases: [(fn(f64, Energy) -> Dopant, [f64; 6]); 2] = [
            (Dopant::donor, [0.8, 0.9, 0.95, 1.0, 1.05, 1.1]),
            (Dopant::acceptor, [0.02, 0.1, 0.15, 0.2, 0.25, 0.3]),
        ];

        for (dopant, levels) in cases {
            let balance = balance(dopant);
            for ef in levels {
                let h = 1e-6;
                let numeric = (balance.residual(ef + h) - balance.residual(ef - h)) / (2.0 * h);
                let analytic = balance.slope(&balance.carriers(ef));
                assert_relative_eq!(analytic, numeric, max_relative = 1e-5);
            }
        }
    }

    #[test]
    fn dopant_level_and_densities() {
        let balance = balance(Dopant::donor);

        assert_relative_eq!(balance.dopant_level().get::<electronvolt>(), 1.075, epsilon = 1e-12);
        assert_relative_eq!(balance.conduction_density(), 5.2e18, max_relative = 1e-2);
        assert!(balance.valence_density() > balance.conduction_density());
    }

    #[test]
    fn rejects_negative_concentration() {
        let si = Material::silicon();
        let crystal =
            Semiconductor::from_material(&si, ThermodynamicTemperature::new::<kelvin>(300.0))
                .unwrap();

        let result = ChargeBalance::new(&crystal, Dopant::donor(-1e16, si.donor_ionization));

        assert!(matches!(result, Err(Error::Negative { .. })));
    }
}
