use crate::cosine_weighted::{sample_direction, Sample};
use crate::frame::BasisFrame;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Endless stream of cosine weighted directions on a hemisphere.
///
/// Every item consumes two draws from the owned random source, so two
/// streams over equally seeded sources yield identical samples.
pub struct CosineSamples<R> {
    frame: BasisFrame,
    rng: R,
}

impl<R: Rng> CosineSamples<R> {
    pub fn new(frame: BasisFrame, rng: R) -> Self {
        CosineSamples { frame, rng }
    }

    pub fn frame(&self) -> &BasisFrame {
        &self.frame
    }

    /// Gives back the random source, e.g. to continue drawing from it elsewhere.
    pub fn into_rng(self) -> R {
        self.rng
    }
}

impl CosineSamples<StdRng> {
    pub fn seeded(frame: BasisFrame, seed: u64) -> Self {
        CosineSamples::new(frame, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(frame: BasisFrame) -> Self {
        CosineSamples::new(frame, StdRng::from_entropy())
    }
}

impl<R: Rng> Iterator for CosineSamples<R> {
    type Item = Sample;

    fn next(&mut self) -> Option<Self::Item> {
        Some(sample_direction(&self.frame, &mut self.rng))
    }
}
