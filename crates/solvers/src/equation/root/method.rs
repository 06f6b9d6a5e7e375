use std::{fmt, str::FromStr};

use super::Error;

/// The available root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Bracket halving, also known as dichotomy.
    Bisection,

    /// Fixed-slope iteration, also known as "fixed-point".
    Chord,

    /// Newton–Raphson.
    Newton,

    /// Two-point secant.
    Secant,
}

impl Method {
    pub const ALL: [Method; 4] = [
        Method::Bisection,
        Method::Chord,
        Method::Newton,
        Method::Secant,
    ];

    /// Returns true if the method needs an analytic derivative.
    #[must_use]
    pub fn requires_derivative(self) -> bool {
        matches!(self, Method::Chord | Method::Newton)
    }

    /// Returns the canonical lowercase name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Method::Bisection => "bisection",
            Method::Chord => "chord",
            Method::Newton => "newton",
            Method::Secant => "secant",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = Error;

    /// Parses a method name, ignoring case and surrounding whitespace.
    ///
    /// Accepts the aliases `dichotomy` for bisection, `fixed-point`
    /// (or `fixed_point`) for the chord method and `newtown` for Newton.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bisection" | "dichotomy" => Ok(Method::Bisection),
            "chord" | "fixed-point" | "fixed_point" => Ok(Method::Chord),
            "newton" | "newtown" => Ok(Method::Newton),
            "secant" => Ok(Method::Secant),
            _ => Err(Error::UnknownMethod {
                name: s.to_owned(),
            }),
        }
    }
}
