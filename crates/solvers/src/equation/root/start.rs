use super::{Error, Method};

/// Initial data for a root search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Start {
    /// An interval `[low, high]`, for bisection.
    Bracket([f64; 2]),

    /// A single starting point, for Newton, chord, or secant.
    Point(f64),

    /// Two starting points `[previous, current]`, for secant.
    Pair([f64; 2]),
}

impl Start {
    /// Returns a short name for the kind of start.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Start::Bracket(_) => "bracket",
            Start::Point(_) => "point",
            Start::Pair(_) => "pair",
        }
    }

    pub(super) fn point(self, method: Method) -> Result<f64, Error> {
        match self {
            Start::Point(x0) => Ok(x0),
            other => Err(Error::StartMismatch {
                method,
                start: other.kind(),
            }),
        }
    }
}
