#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use uom::si::{
    energy::electronvolt,
    f64::{Energy, Length},
    length::centimeter,
};

use crate::Error;

/// Room-temperature parameters of a bulk semiconductor.
///
/// Effective masses are density-of-states masses in units of the free
/// electron mass. Mobilities are in cm²/(V·s). The dopant ionization
/// energies belong to a common shallow donor and acceptor for the crystal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Material {
    pub name: String,
    pub lattice_constant: Length,
    /// Relative static permittivity.
    pub permittivity: f64,
    pub electron_affinity: Energy,
    pub band_gap: Energy,
    pub spin_orbit_splitting: Energy,
    pub electron_mass: f64,
    pub hole_mass: f64,
    pub donor_ionization: Energy,
    pub acceptor_ionization: Energy,
    pub electron_mobility: f64,
    pub hole_mobility: f64,
    pub diffusion: Diffusion,
}

/// Minority-carrier diffusion parameters.
///
/// Diffusivities are in cm²/s and diffusion lengths in cm. The lengths
/// depend strongly on purity; the presets carry typical long values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Diffusion {
    pub electron_diffusivity: f64,
    pub hole_diffusivity: f64,
    pub electron_length: f64,
    pub hole_length: f64,
}

/// Compact row used to build the presets.
struct Row {
    name: &'static str,
    lattice_cm: f64,
    permittivity: f64,
    affinity: f64,
    gap: f64,
    split_off: f64,
    me: f64,
    mh: f64,
    jd: f64,
    ja: f64,
    mu_n: f64,
    mu_p: f64,
    dn: f64,
    dp: f64,
    ln: f64,
    lp: f64,
}

#[rustfmt::skip]
const PRESETS: [Row; 8] = [
    Row { name: "Si",   lattice_cm: 5.43e-8,    permittivity: 11.7,  affinity: 4.05, gap: 1.12,  split_off: 0.044, me: 0.35, mh: 0.81, jd: 0.045,  ja: 0.045,  mu_n: 1400.0,  mu_p: 450.0, dn: 36.0,   dp: 12.0, ln: 3e-3,   lp: 5e-3 },
    Row { name: "Ge",   lattice_cm: 5.658e-8,   permittivity: 16.2,  affinity: 4.0,  gap: 0.661, split_off: 0.29,  me: 0.22, mh: 0.34, jd: 0.013,  ja: 0.011,  mu_n: 3900.0,  mu_p: 1900.0, dn: 100.0,  dp: 50.0, ln: 0.2,    lp: 0.3 },
    Row { name: "GaAs", lattice_cm: 5.653_25e-8, permittivity: 12.9, affinity: 4.07, gap: 1.414, split_off: 0.34,  me: 0.85, mh: 0.53, jd: 0.006,  ja: 0.025,  mu_n: 8500.0,  mu_p: 400.0, dn: 200.0,  dp: 10.0, ln: 4e-5,   lp: 4e-5 },
    Row { name: "GaP",  lattice_cm: 5.4505e-8,  permittivity: 11.1,  affinity: 3.8,  gap: 2.26,  split_off: 0.08,  me: 0.79, mh: 0.83, jd: 0.107,  ja: 0.0697, mu_n: 250.0,   mu_p: 150.0, dn: 6.5,    dp: 4.0,  ln: 7e-6,   lp: 2e-5 },
    Row { name: "InAs", lattice_cm: 6.0583e-8,  permittivity: 15.15, affinity: 4.9,  gap: 0.354, split_off: 0.41,  me: 0.29, mh: 0.41, jd: 0.001,  ja: 0.01,   mu_n: 40000.0, mu_p: 500.0, dn: 1000.0, dp: 13.0, ln: 4.5e-5, lp: 1.5e-5 },
    Row { name: "C",    lattice_cm: 3.567e-8,   permittivity: 5.7,   affinity: 0.0,  gap: 5.46,  split_off: 0.006, me: 0.57, mh: 0.8,  jd: 1.46,   ja: 0.37,   mu_n: 2200.0,  mu_p: 1800.0, dn: 57.0,   dp: 46.0, ln: 1.0,    lp: 1.0 },
    Row { name: "GaSb", lattice_cm: 6.095_93e-8, permittivity: 15.7, affinity: 4.06, gap: 0.726, split_off: 0.8,   me: 0.57, mh: 0.8,  jd: 0.05,   ja: 0.037,  mu_n: 3000.0,  mu_p: 1000.0, dn: 75.0,   dp: 25.0, ln: 1e-5,   lp: 1e-5 },
    Row { name: "InSb", lattice_cm: 6.479e-8,   permittivity: 16.8,  affinity: 4.59, gap: 0.17,  split_off: 0.8,   me: 0.25, mh: 0.43, jd: 0.0007, ja: 0.01,   mu_n: 77000.0, mu_p: 850.0, dn: 2000.0, dp: 22.0, ln: 1e-5,   lp: 1e-5 },
];

fn ev(value: f64) -> Energy {
    Energy::new::<electronvolt>(value)
}

impl Row {
    fn material(&self) -> Material {
        Material {
            name: self.name.to_owned(),
            lattice_constant: Length::new::<centimeter>(self.lattice_cm),
            permittivity: self.permittivity,
            electron_affinity: ev(self.affinity),
            band_gap: ev(self.gap),
            spin_orbit_splitting: ev(self.split_off),
            electron_mass: self.me,
            hole_mass: self.mh,
            donor_ionization: ev(self.jd),
            acceptor_ionization: ev(self.ja),
            electron_mobility: self.mu_n,
            hole_mobility: self.mu_p,
            diffusion: Diffusion {
                electron_diffusivity: self.dn,
                hole_diffusivity: self.dp,
                electron_length: self.ln,
                hole_length: self.lp,
            },
        }
    }
}

impl Material {
    /// Silicon, with phosphorus donors and boron acceptors.
    #[must_use]
    pub fn silicon() -> Self {
        PRESETS[0].material()
    }

    /// Germanium, with phosphorus donors and boron acceptors.
    #[must_use]
    pub fn germanium() -> Self {
        PRESETS[1].material()
    }

    /// Gallium arsenide, with germanium donors and zinc acceptors.
    #[must_use]
    pub fn gallium_arsenide() -> Self {
        PRESETS[2].material()
    }

    /// Gallium phosphide, with sulfur donors and zinc acceptors.
    #[must_use]
    pub fn gallium_phosphide() -> Self {
        PRESETS[3].material()
    }

    /// Indium arsenide.
    #[must_use]
    pub fn indium_arsenide() -> Self {
        PRESETS[4].material()
    }

    /// Diamond, with deep nitrogen donors and boron acceptors.
    #[must_use]
    pub fn diamond() -> Self {
        PRESETS[5].material()
    }

    /// Gallium antimonide.
    #[must_use]
    pub fn gallium_antimonide() -> Self {
        PRESETS[6].material()
    }

    /// Indium antimonide.
    #[must_use]
    pub fn indium_antimonide() -> Self {
        PRESETS[7].material()
    }

    /// Returns every preset.
    #[must_use]
    pub fn presets() -> Vec<Self> {
        PRESETS.iter().map(Row::material).collect()
    }

    /// Looks up a preset by chemical formula, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownMaterial`] if no preset matches.
    pub fn by_name(name: &str) -> Result<Self, Error> {
        let wanted = name.trim();
        PRESETS
            .iter()
            .find(|row| row.name.eq_ignore_ascii_case(wanted))
            .map(Row::material)
            .ok_or_else(|| Error::UnknownMaterial {
                name: name.to_owned(),
            })
    }
}
