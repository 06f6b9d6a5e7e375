//! Scalar equation solvers for pame.
//!
//! Everything lives under [`equation`]: four interchangeable root-finding
//! strategies plus the [`equation::root`] dispatcher that selects between
//! them at runtime.

pub mod equation;
