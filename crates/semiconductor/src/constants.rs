//! Physical constants (CODATA 2018).

/// Boltzmann constant in eV/K.
pub const BOLTZMANN_EV: f64 = 8.617_333_262e-5;

/// Boltzmann constant in J/K.
pub const BOLTZMANN: f64 = 1.380_649e-23;

/// Planck constant in J·s.
pub const PLANCK: f64 = 6.626_070_15e-34;

/// Free electron mass in kg.
pub const ELECTRON_MASS: f64 = 9.109_383_701_5e-31;

/// Elementary charge in C.
pub const ELEMENTARY_CHARGE: f64 = 1.602_176_634e-19;

/// Vacuum permittivity in F/cm.
pub const VACUUM_PERMITTIVITY: f64 = 8.854_187_812_8e-14;
