#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use uom::si::{energy::electronvolt, f64::Energy};

use crate::Error;

/// Ground-state degeneracy factor in the donor occupation function.
const DONOR_FACTOR: f64 = 0.5;

/// Ground-state degeneracy factor in the acceptor occupation function.
const ACCEPTOR_FACTOR: f64 = 0.25;

/// Whether a dopant gives electrons away or takes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DopantKind {
    Donor,
    Acceptor,
}

/// A single shallow dopant species.
///
/// The ionization energy is measured from the band the dopant ionizes
/// into: down from the conduction band for donors, up from the valence
/// band for acceptors.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Dopant {
    Donor {
        /// Donor concentration in cm⁻³.
        concentration: f64,
        ionization_energy: Energy,
    },
    Acceptor {
        /// Acceptor concentration in cm⁻³.
        concentration: f64,
        ionization_energy: Energy,
    },
}

impl Dopant {
    /// Creates a donor species.
    #[must_use]
    pub fn donor(concentration: f64, ionization_energy: Energy) -> Self {
        Self::Donor {
            concentration,
            ionization_energy,
        }
    }

    /// Creates an acceptor species.
    #[must_use]
    pub fn acceptor(concentration: f64, ionization_energy: Energy) -> Self {
        Self::Acceptor {
            concentration,
            ionization_energy,
        }
    }

    #[must_use]
    pub fn kind(&self) -> DopantKind {
        match self {
            Self::Donor { .. } => DopantKind::Donor,
            Self::Acceptor { .. } => DopantKind::Acceptor,
        }
    }

    /// Returns the concentration in cm⁻³.
    #[must_use]
    pub fn concentration(&self) -> f64 {
        match *self {
            Self::Donor { concentration, .. } | Self::Acceptor { concentration, .. } => {
                concentration
            }
        }
    }

    #[must_use]
    pub fn ionization_energy(&self) -> Energy {
        match *self {
            Self::Donor {
                ionization_energy, ..
            }
            | Self::Acceptor {
                ionization_energy, ..
            } => ionization_energy,
        }
    }

    /// Returns the same species at a different concentration.
    #[must_use]
    pub fn with_concentration(self, concentration: f64) -> Self {
        match self {
            Self::Donor {
                ionization_energy, ..
            } => Self::donor(concentration, ionization_energy),
            Self::Acceptor {
                ionization_energy, ..
            } => Self::acceptor(concentration, ionization_energy),
        }
    }

    /// Checks that concentration and ionization energy are non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending parameter.
    pub fn validate(&self) -> Result<(), Error> {
        Error::check_non_negative("dopant concentration", self.concentration())?;
        Error::check_non_negative(
            "ionization energy",
            self.ionization_energy().get::<electronvolt>(),
        )?;
        Ok(())
    }

    /// Returns the dopant level in eV given the band edges in eV.
    pub(crate) fn level(&self, conduction_band: f64, valence_band: f64) -> f64 {
        let ionization = self.ionization_energy().get::<electronvolt>();
        match self {
            Self::Donor { .. } => conduction_band - ionization,
            Self::Acceptor { .. } => valence_band + ionization,
        }
    }

    /// Returns the ionized fraction for a Fermi level, dopant level, and
    /// thermal energy, all in eV.
    ///
    /// ```text
    /// donor:    1 / (1 + ½ exp((Ef − Ed) / kT))
    /// acceptor: 1 / (1 + ¼ exp((Ea − Ef) / kT))
    /// ```
    pub(crate) fn ionized_fraction(&self, fermi_level: f64, level: f64, kt: f64) -> f64 {
        let occupancy = match self {
            Self::Donor { .. } => ((fermi_level - level) / kt).exp(),
            Self::Acceptor { .. } => ((level - fermi_level) / kt).exp(),
        };
        1.0 / (1.0 + self.degeneracy() * occupancy)
    }

    /// Ground-state degeneracy factor of the occupation function.
    pub(crate) fn degeneracy(&self) -> f64 {
        match self {
            Self::Donor { .. } => DONOR_FACTOR,
            Self::Acceptor { .. } => ACCEPTOR_FACTOR,
        }
    }
}
