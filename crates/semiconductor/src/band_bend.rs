//! Band bending at a depleted n-type surface.
//!
//! Acceptor-like surface states trap electrons from the bulk and leave a
//! depletion layer of ionized donors behind. In equilibrium the depletion
//! charge balances the trapped charge plus the charge induced by an
//! external field:
//!
//! ```text
//! N_sc(φ) = √(2 ε ε0 φ Nd / q)                      (cm⁻²)
//! N_as⁻(φ) = Nas / (1 + exp((Eas + φ − Ef) / kT))
//! r(φ)    = (N_sc − N_as⁻ − ε0 E_out / q) / Nas
//! ```
//!
//! `φ` is the band bending in eV. The residual is increasing in `φ`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;
use uom::si::{
    energy::electronvolt,
    f64::{Energy, ThermodynamicTemperature},
    thermodynamic_temperature::kelvin,
};

use pame_core::{DerivativeProblem, EquationProblem, Model};
use pame_solvers::equation::root::{self, Method, Start};

use crate::{
    Error, SearchOptions,
    constants::{ELEMENTARY_CHARGE, VACUUM_PERMITTIVITY},
    density::thermal_energy_ev,
};

/// Residual tolerance for the surface balance, as a fraction of `Nas`.
const DEFAULT_TOLERANCE: f64 = 1e-7;

/// A trial band bending below zero.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("band bending must be non-negative, got {phi} eV")]
pub struct NegativeBandBending {
    pub phi: f64,
}

/// Parameters of a depleted n-type surface.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SurfaceBarrier {
    /// Relative static permittivity.
    pub permittivity: f64,
    /// Bulk donor concentration in cm⁻³.
    pub donor_concentration: f64,
    /// Surface acceptor density in cm⁻².
    pub surface_states: f64,
    /// Surface acceptor level, on the same scale as `fermi_level`.
    pub surface_state_energy: Energy,
    pub fermi_level: Energy,
    pub temperature: ThermodynamicTemperature,
    /// External field normal to the surface in V/cm.
    pub external_field: f64,
}

/// Sheet charges at one band bending, in cm⁻².
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SurfaceCharge {
    /// Ionized donors in the depletion layer.
    pub depletion: f64,
    /// Electrons trapped in surface states.
    pub trapped: f64,
    /// Charge induced by the external field.
    pub induced: f64,
}

impl SurfaceCharge {
    /// Returns the net sheet charge `N_sc − N_as⁻ − induced`.
    #[must_use]
    pub fn net(&self) -> f64 {
        self.depletion - self.trapped - self.induced
    }
}

/// The solved surface barrier.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BandBending {
    pub phi: Energy,
    /// Depletion layer width in cm.
    pub depletion_width: f64,
    pub charge: SurfaceCharge,
    /// Net sheet charge over `surface_states`.
    pub residual: f64,
    pub iterations: usize,
}

impl SurfaceBarrier {
    /// Checks that every parameter is physical.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first offending parameter.
    pub fn validate(&self) -> Result<(), Error> {
        Error::check_positive("permittivity", self.permittivity)?;
        Error::check_positive("donor concentration", self.donor_concentration)?;
        Error::check_positive("surface state density", self.surface_states)?;
        Error::check_finite(
            "surface state energy",
            self.surface_state_energy.get::<electronvolt>(),
        )?;
        Error::check_finite("fermi level", self.fermi_level.get::<electronvolt>())?;
        Error::check_temperature(self.temperature.get::<kelvin>())?;
        Error::check_finite("external field", self.external_field)?;
        Ok(())
    }

    /// Computes the sheet charges at a band bending in eV.
    ///
    /// # Errors
    ///
    /// Returns [`NegativeBandBending`] if `phi < 0`.
    pub fn charge(&self, phi: f64) -> Result<SurfaceCharge, NegativeBandBending> {
        if phi < 0.0 {
            return Err(NegativeBandBending { phi });
        }

        let u = self.occupancy_exponent(phi);
        Ok(SurfaceCharge {
            depletion: (self.depletion_coefficient() * phi).sqrt(),
            trapped: self.surface_states / (1.0 + u.exp()),
            induced: self.induced(),
        })
    }

    /// Returns the width of the depletion layer in cm for a band bending in eV.
    #[must_use]
    pub fn depletion_width(&self, phi: f64) -> f64 {
        (self.depletion_coefficient() * phi.max(0.0)).sqrt() / self.donor_concentration
    }

    /// A band bending at which the depletion charge alone exceeds every
    /// other term, so the residual is non-negative there.
    #[must_use]
    pub fn upper_bound(&self) -> f64 {
        let sheet = self.surface_states + self.induced().abs();
        sheet * sheet / self.depletion_coefficient()
    }

    fn slope(&self, phi: f64, charge: &SurfaceCharge) -> f64 {
        let kt = thermal_energy_ev(self.temperature.get::<kelvin>());
        let depletion = charge.depletion / (2.0 * phi);
        let filled = charge.trapped / self.surface_states;
        let emptying = charge.trapped * (1.0 - filled) / kt;
        (depletion + emptying) / self.surface_states
    }

    /// `2 ε ε0 Nd / q`, so that `N_sc = √(coefficient · φ)`.
    fn depletion_coefficient(&self) -> f64 {
        2.0 * self.permittivity * VACUUM_PERMITTIVITY * self.donor_concentration
            / ELEMENTARY_CHARGE
    }

    fn induced(&self) -> f64 {
        VACUUM_PERMITTIVITY * self.external_field / ELEMENTARY_CHARGE
    }

    fn occupancy_exponent(&self, phi: f64) -> f64 {
        let kt = thermal_energy_ev(self.temperature.get::<kelvin>());
        (self.surface_state_energy.get::<electronvolt>() + phi - self.fermi_level.get::<electronvolt>())
            / kt
    }
}

impl Model for SurfaceBarrier {
    type Input = f64;
    type Output = SurfaceCharge;
    type Error = NegativeBandBending;

    fn call(&self, phi: &f64) -> Result<SurfaceCharge, Self::Error> {
        self.charge(*phi)
    }
}

impl EquationProblem<1> for SurfaceBarrier {
    type Input = f64;
    type Output = SurfaceCharge;
    type Error = NegativeBandBending;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(x[0])
    }

    fn residuals(&self, _phi: &f64, charge: &SurfaceCharge) -> Result<[f64; 1], Self::Error> {
        Ok([charge.net() / self.surface_states])
    }
}

impl DerivativeProblem for SurfaceBarrier {
    fn derivative(&self, phi: &f64, charge: &SurfaceCharge) -> Result<f64, Self::Error> {
        Ok(self.slope(*phi, charge))
    }
}

/// Solves for the band bending of a surface barrier.
///
/// Without an explicit start, bisection searches `[0, φmax]` with
/// `φmax` from [`SurfaceBarrier::upper_bound`], and the open methods start
/// from `φmax / 2`.
///
/// The residual is the net sheet charge divided by
/// [`SurfaceBarrier::surface_states`], so the default tolerance of `1e-7`
/// accepts `|net charge| < 1e-7 · Nas` cm⁻². A tolerance set through
/// [`SearchOptions::tolerance`] is read the same way.
///
/// # Errors
///
/// Returns an error if the barrier is invalid, the options do not form a
/// valid solver config, or the root search fails (including an iterate
/// stepping below zero).
pub fn find_band_bending(
    barrier: &SurfaceBarrier,
    options: &SearchOptions,
) -> Result<BandBending, Error> {
    barrier.validate()?;
    let config = options.config(DEFAULT_TOLERANCE)?;
    let upper = barrier.upper_bound();
    let start = options.start_or(|| match options.method() {
        Method::Bisection => Start::Bracket([0.0, upper]),
        _ => Start::Point(0.5 * upper),
    });

    let solution = root::solve(options.method(), barrier, barrier, start, &config)?;

    debug!(
        method = %options.method(),
        phi = solution.x,
        iterations = solution.iters,
        "band bending found"
    );

    Ok(BandBending {
        phi: Energy::new::<electronvolt>(solution.x),
        depletion_width: barrier.depletion_width(solution.x),
        charge: solution.snapshot.output,
        residual: solution.residual,
        iterations: solution.iters,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn barrier() -> SurfaceBarrier {
        SurfaceBarrier {
            permittivity: 11.7,
            donor_concentration: 1e17,
            surface_states: 1e12,
            surface_state_energy: Energy::new::<electronvolt>(0.1),
            fermi_level: Energy::new::<electronvolt>(1.0),
            temperature: ThermodynamicTemperature::new::<kelvin>(300.0),
            external_field: 0.0,
        }
    }

    fn residual(barrier: &SurfaceBarrier, phi: f64) -> f64 {
        barrier.charge(phi).unwrap().net() / barrier.surface_states
    }

    #[test]
    fn every_method_finds_the_same_bending() {
        let barrier = barrier();
        let reference = find_band_bending(&barrier, &SearchOptions::default()).unwrap();
        let phi = reference.phi.get::<electronvolt>();

        assert!(phi > 0.75 && phi < 0.78, "phi = {phi}");
        assert!(reference.residual.abs() < 1e-7);

        for method in Method::ALL {
            let result = find_band_bending(&barrier, &SearchOptions::new(method)).unwrap();
            assert_relative_eq!(result.phi.get::<electronvolt>(), phi, epsilon = 1e-6);
        }
    }

    #[test]
    fn tolerance_is_relative_to_surface_states() {
        for surface_states in [1e11, 1e12, 1e13] {
            let barrier = SurfaceBarrier {
                surface_states,
                ..barrier()
            };
            let result = find_band_bending(&barrier, &SearchOptions::default()).unwrap();

            assert_relative_eq!(
                result.residual * surface_states,
                result.charge.net(),
                max_relative = 1e-12
            );
            assert!(result.charge.net().abs() < 1e-7 * surface_states);
        }
    }

    #[test]
    fn open_methods_from_a_shallow_start() {
        let barrier = barrier();
        let expected = find_band_bending(&barrier, &SearchOptions::default())
            .unwrap()
            .phi
            .get::<electronvolt>();

        for method in [Method::Newton, Method::Chord, Method::Secant] {
            let options = SearchOptions::new(method).start(Start::Point(0.05)).delta(1e-2);
            let result = find_band_bending(&barrier, &options).unwrap();
            assert_relative_eq!(result.phi.get::<electronvolt>(), expected, epsilon = 1e-6);
        }
    }

    #[test]
    fn depletion_charge_balances_trapped_charge() {
        let result = find_band_bending(&barrier(), &SearchOptions::new(Method::Newton)).unwrap();

        assert_relative_eq!(result.charge.depletion, result.charge.trapped, max_relative = 1e-6);
        assert_relative_eq!(
            result.depletion_width,
            result.charge.depletion / 1e17,
            max_relative = 1e-12
        );
    }

    #[test]
    fn external_field_adds_induced_charge() {
        let mut field = barrier();
        field.external_field = 1e5;

        let without = find_band_bending(&barrier(), &SearchOptions::default()).unwrap();
        let with = find_band_bending(&field, &SearchOptions::default()).unwrap();

        assert!(with.charge.induced > 0.0);
        assert!(with.phi > without.phi);
    }

    #[test]
    fn analytic_slope_matches_central_difference() {
        let barrier = barrier();
        for phi in [0.05, 0.3, 0.7, 0.76, 0.9] {
            let h = 1e-7;
            let numeric = (residual(&barrier, phi + h) - residual(&barrier, phi - h)) / (2.0 * h);
            let analytic = barrier.slope(phi, &barrier.charge(phi).unwrap());
            assert_relative_eq!(analytic, numeric, max_relative = 1e-5);
        }
    }

    #[test]
    fn upper_bound_brackets_the_root() {
        let barrier = barrier();
        assert!(residual(&barrier, 0.0) < 0.0);
        assert!(residual(&barrier, barrier.upper_bound()) >= 0.0);
    }

    #[test]
    fn negative_bending_is_a_model_error() {
        assert_eq!(barrier().charge(-0.1), Err(NegativeBandBending { phi: -0.1 }));

        let options = SearchOptions::new(Method::Bisection).start(Start::Bracket([-0.5, 1.0]));
        let result = find_band_bending(&barrier(), &options);
        assert!(matches!(result, Err(Error::Solver(root::Error::Model(_)))));
    }

    #[test]
    fn invalid_barrier_is_rejected() {
        let mut bad = barrier();
        bad.surface_states = 0.0;

        assert!(matches!(
            find_band_bending(&bad, &SearchOptions::default()),
            Err(Error::NonPositive { name: "surface state density", .. })
        ));
    }
}
