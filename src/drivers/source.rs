use std::collections::VecDeque;
/// One snapshot of a sensor's recent readings, drawn as a single polyline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SampleBatch {
    pub samples: Vec<f64>,
}
impl SampleBatch {
    pub fn new(samples: Vec<f64>) -> Self {
        Self { samples }
    }
    pub fn len(&self) -> usize {
        self.samples.len()
    }
    pub fn latest(&self) -> Option<f64> {
        self.samples.last().copied()
    }
    /// Returns `(min, max)`, or `None` for an empty batch.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        let first = *self.samples.first()?;
        Some(
            self.samples
                .iter()
                .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
        )
    }
}
impl From<Vec<f64>> for SampleBatch {
    fn from(samples: Vec<f64>) -> Self {
        Self::new(samples)
    }
}
/// Something that hands out sample batches one at a time.
pub trait BatchSource {
    fn next_batch(&mut self) -> Option<SampleBatch>;
}
/// Per-panel queue of pre-generated batches. Consumed front to back and
/// never replenished.
#[derive(Clone, Debug, Default)]
pub struct Feed {
    queue: VecDeque<SampleBatch>,
}
impl Feed {
    pub fn new(batches: impl IntoIterator<Item = SampleBatch>) -> Self {
        Self {
            queue: batches.into_iter().collect(),
        }
    }
    pub fn len(&self) -> usize {
        self.queue.len()
    }
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
impl BatchSource for Feed {
    fn next_batch(&mut self) -> Option<SampleBatch> {
        self.queue.pop_front()
    }
}
