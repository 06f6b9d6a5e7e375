pub mod equation;

pub use equation::{DerivativeProblem, EquationProblem};
