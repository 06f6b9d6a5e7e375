//! Equilibrium carrier statistics in doped semiconductors.
//!
//! The central calculation is the Fermi level that makes a doped crystal
//! electrically neutral. [`ChargeBalance`] expresses neutrality as a scalar
//! residual in the Fermi level, and [`find_fermi_level`] hands it to one of
//! the root finders in [`pame_solvers`]. The same machinery solves the
//! surface charge balance for the band bending at a depleted surface
//! ([`find_band_bending`]).
//!
//! # Conventions
//!
//! - Energies are [`uom`] quantities at the API boundary and electronvolts
//!   internally. The valence band edge of a [`Material`] sits at 0 eV.
//! - Volume concentrations are plain `f64` values in cm⁻³, sheet
//!   concentrations in cm⁻², lengths in cm.
//! - Formatting for display ([`Scientific`]) is kept out of the physics.
//!
//! # Example
//!
//! ```
//! use pame_semiconductor::{Dopant, Material, SearchOptions, Semiconductor, find_fermi_level};
//! use pame_solvers::equation::root::Method;
//! use uom::si::{energy::electronvolt, f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};
//!
//! let silicon = Material::silicon();
//! let crystal = Semiconductor::from_material(&silicon, ThermodynamicTemperature::new::<kelvin>(300.0))?;
//! let dopant = Dopant::donor(1e16, silicon.donor_ionization);
//!
//! let equilibrium = find_fermi_level(&crystal, dopant, &SearchOptions::new(Method::Newton))?;
//! let ef = equilibrium.fermi_level.get::<electronvolt>();
//! assert!(ef > 0.9 && ef < 1.0);
//! # Ok::<(), pame_semiconductor::Error>(())
//! ```

pub mod constants;
pub mod density;

mod band_bend;
mod charge_balance;
mod display;
mod dopant;
mod error;
mod fermi;
mod junction;
mod material;
mod search;
mod semiconductor;
mod sweep;

pub use band_bend::{
    BandBending, NegativeBandBending, SurfaceBarrier, SurfaceCharge, find_band_bending,
};
pub use charge_balance::{Carriers, ChargeBalance};
pub use display::Scientific;
pub use dopant::{Dopant, DopantKind};
pub use error::Error;
pub use fermi::{Equilibrium, estimate_fermi_level, find_fermi_level};
pub use junction::{
    DepletionWidths, JunctionCurrent, built_in_potential, current_voltage, debye_length,
    depletion_widths, diode_current, saturation_current,
};
pub use material::{Diffusion, Material};
pub use search::SearchOptions;
pub use semiconductor::Semiconductor;
pub use sweep::{SweepPoint, log_space, sweep_concentrations, sweep_temperatures};
