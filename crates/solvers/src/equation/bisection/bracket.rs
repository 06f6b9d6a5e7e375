use thiserror::Error;

/// Reasons a bisection bracket is rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint")]
    NonFinite,

    /// The low endpoint is not strictly below the high endpoint.
    #[error("low must be strictly less than high")]
    NotIncreasing,
}

/// Current bisection interval `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    low: f64,
    high: f64,
}

impl Bracket {
    /// Validates the endpoints.
    ///
    /// Endpoints are not reordered: a reversed bracket is a caller error.
    ///
    /// # Errors
    ///
    /// Returns a [`BracketError`] if an endpoint is non-finite or
    /// `low >= high`.
    pub fn new(bracket: [f64; 2]) -> Result<Self, BracketError> {
        let [low, high] = bracket;

        if !low.is_finite() || !high.is_finite() {
            return Err(BracketError::NonFinite);
        }

        if low >= high {
            return Err(BracketError::NotIncreasing);
        }

        Ok(Self { low, high })
    }

    /// Returns the low endpoint.
    #[must_use]
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Returns the high endpoint.
    #[must_use]
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Returns the bracket bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.low, self.high]
    }

    /// Returns the midpoint of the bracket.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.low + self.high)
    }

    /// Returns the bracket width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// Keeps the right half: `[mid, high]`.
    pub(super) fn keep_upper(&mut self, mid: f64) {
        self.low = mid;
    }

    /// Keeps the left half: `[low, mid]`.
    pub(super) fn keep_lower(&mut self, mid: f64) {
        self.high = mid;
    }
}
