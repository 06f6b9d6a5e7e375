#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;
use uom::si::{energy::electronvolt, f64::Energy};

use pame_solvers::equation::root::{self, Start};

use crate::{ChargeBalance, Dopant, Error, SearchOptions, Semiconductor};

/// Relative residual tolerance for the neutrality condition.
pub(crate) const DEFAULT_TOLERANCE: f64 = 1e-4;

/// The equilibrium state of a doped crystal.
///
/// Densities are in cm⁻³.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Equilibrium {
    pub fermi_level: Energy,
    pub electrons: f64,
    pub holes: f64,
    pub dopant_concentration: f64,
    pub ionized_dopants: f64,
    pub net_charge: f64,
    /// Relative charge imbalance at the Fermi level.
    pub residual: f64,
    pub conduction_density: f64,
    pub valence_density: f64,
    pub iterations: usize,
}

impl Equilibrium {
    /// Returns the ionized share of the dopants, in `[0, 1]`.
    #[must_use]
    pub fn ionized_fraction(&self) -> f64 {
        if self.dopant_concentration > 0.0 {
            self.ionized_dopants / self.dopant_concentration
        } else {
            0.0
        }
    }
}

/// Solves for the Fermi level that makes the crystal neutral.
///
/// Without an explicit start, bisection searches `[Ev, Ec]` and the open
/// methods start from [`estimate_fermi_level`].
///
/// # Errors
///
/// Returns an error if the dopant is invalid, the options do not form a
/// valid solver config, or the root search fails.
pub fn find_fermi_level(
    semiconductor: &Semiconductor,
    dopant: Dopant,
    options: &SearchOptions,
) -> Result<Equilibrium, Error> {
    let balance = ChargeBalance::new(semiconductor, dopant)?;
    let config = options.config(DEFAULT_TOLERANCE)?;
    let start = options.start_or(|| default_start(options, semiconductor, dopant));

    let solution = root::solve(options.method(), &balance, &balance, start, &config)?;
    let carriers = solution.snapshot.output;

    debug!(
        method = %options.method(),
        fermi_level = solution.x,
        iterations = solution.iters,
        "fermi level found"
    );

    Ok(Equilibrium {
        fermi_level: Energy::new::<electronvolt>(solution.x),
        electrons: carriers.electrons,
        holes: carriers.holes,
        dopant_concentration: dopant.concentration(),
        ionized_dopants: carriers.ionized,
        net_charge: carriers.net_charge,
        residual: solution.residual,
        conduction_density: balance.conduction_density(),
        valence_density: balance.valence_density(),
        iterations: solution.iters,
    })
}

/// Estimates the Fermi level from a closed-form neutrality balance.
///
/// Minority carriers are dropped from the dopant balance, which then gives
/// the ionized dopants `N⁺` in closed form:
///
/// ```text
/// K  = Nc exp(−Jd / kT) / ½      (donor)
/// K  = Nv exp(−Ja / kT) / ¼      (acceptor)
/// N⁺ = 2N / (1 + √(1 + 4N / K))
/// ```
///
/// The majority density `N⁺/2 + √(N⁺²/4 + ni²)` then also covers intrinsic
/// crystals, and the level follows from `Ec − kT ln(Nc / n)` or
/// `Ev + kT ln(Nv / p)`.
///
/// The estimate is kept at least `kT` inside the gap. Without dopants it
/// falls back to the intrinsic level.
#[must_use]
pub fn estimate_fermi_level(semiconductor: &Semiconductor, dopant: Dopant) -> Energy {
    let (ec, ev, kt) = (semiconductor.ec(), semiconductor.ev(), semiconductor.kt());
    let concentration = dopant.concentration();

    if concentration <= 0.0 || !concentration.is_finite() {
        return semiconductor.intrinsic_level();
    }

    let band_density = match dopant {
        Dopant::Donor { .. } => semiconductor.conduction_density(),
        Dopant::Acceptor { .. } => semiconductor.valence_density(),
    };
    let ionization = dopant.ionization_energy().get::<electronvolt>();
    let k = band_density * (-ionization / kt).exp() / dopant.degeneracy();
    let ionized = 2.0 * concentration / (1.0 + (1.0 + 4.0 * concentration / k).sqrt());

    let ni = semiconductor.intrinsic_concentration();
    let majority = 0.5 * ionized + (0.25 * ionized * ionized + ni * ni).sqrt();

    let estimate = match dopant {
        Dopant::Donor { .. } => ec - kt * (band_density / majority).ln(),
        Dopant::Acceptor { .. } => ev + kt * (band_density / majority).ln(),
    };

    Energy::new::<electronvolt>(estimate.max(ev + kt).min(ec - kt))
}

fn default_start(options: &SearchOptions, semiconductor: &Semiconductor, dopant: Dopant) -> Start {
    match options.method() {
        root::Method::Bisection => Start::Bracket([semiconductor.ev(), semiconductor.ec()]),
        _ => Start::Point(estimate_fermi_level(semiconductor, dopant).get::<electronvolt>()),
    }
}

#[cfg(test)]
mod tests;
