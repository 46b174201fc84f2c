use rand::Rng;
use serde::{Deserialize, Serialize};
use crate::drivers::{ConsoleError, Feed, SampleBatch};
/// Inclusive integer range a synthetic batch draws its samples from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleRange {
    pub low: i64,
    pub high: i64,
}
impl SampleRange {
    pub const fn new(low: i64, high: i64) -> Self {
        Self { low, high }
    }
    pub fn validate(&self) -> Result<(), ConsoleError> {
        if self.low > self.high {
            return Err(ConsoleError::InvalidSampleRange {
                low: self.low,
                high: self.high,
            });
        }
        Ok(())
    }
    #[cfg(test)]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low as f64 && value <= self.high as f64
    }
}
/// Builds one batch of `len` random integer samples in `range`.
pub fn random_batch<R: Rng + ?Sized>(rng: &mut R, range: SampleRange, len: usize) -> SampleBatch {
    let samples = (0..len)
        .map(|_| rng.gen_range(range.low..=range.high) as f64)
        .collect();
    SampleBatch::new(samples)
}
/// Builds a fresh feed with one batch per range, in order.
pub fn synthetic_feed<R: Rng + ?Sized>(
    rng: &mut R,
    ranges: &[SampleRange],
    samples_per_batch: usize,
) -> Result<Feed, ConsoleError> {
    let mut batches = Vec::with_capacity(ranges.len());
    for range in ranges {
        range.validate()?;
        batches.push(random_batch(rng, *range, samples_per_batch));
    }
    Ok(Feed::new(batches))
}
