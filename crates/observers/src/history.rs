use pame_core::Observer;

use crate::traits::{HasIterate, HasResidual};

/// One recorded iterate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub iter: usize,
    pub x: f64,
    pub residual: f64,
}

/// Records the convergence history of a solve.
///
/// Pass `&mut History` to a solver to keep the recording afterwards.
#[derive(Debug, Clone, Default)]
pub struct History {
    samples: Vec<Sample>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded samples in observation order.
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Returns the most recent sample.
    #[must_use]
    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// Returns the number of recorded samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Iterates over the absolute residuals.
    pub fn residuals(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.residual.abs())
    }

    /// Returns the ratios `|r_{k+1}| / |r_k|` between consecutive samples.
    ///
    /// Values settling below one indicate linear convergence; values
    /// falling towards zero indicate superlinear convergence.
    #[must_use]
    pub fn contraction_ratios(&self) -> Vec<f64> {
        self.samples
            .windows(2)
            .map(|pair| pair[1].residual.abs() / pair[0].residual.abs())
            .collect()
    }

    /// Discards every recorded sample.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    fn record<E: HasIterate + HasResidual>(&mut self, event: &E) {
        self.samples.push(Sample {
            iter: event.iter(),
            x: event.x(),
            residual: event.residual(),
        });
    }
}

impl<E, A> Observer<E, A> for History
where
    E: HasIterate + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}

impl<E, A> Observer<E, A> for &mut History
where
    E: HasIterate + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}
