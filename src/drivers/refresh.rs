use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};
use crate::drivers::{BatchSource, ConsoleError, GraphRenderer, Surface};
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickOutcome {
    /// A batch was taken from the source and drawn. `latest` is its last sample.
    Rendered { latest: Option<f64> },
    /// The source is exhausted; the surface keeps its last drawing.
    Idle,
}
/// One refresh cycle: take the next batch, if any, and draw it.
pub fn tick<S, B>(
    surface: &mut S,
    source: &mut B,
    renderer: &GraphRenderer,
) -> Result<TickOutcome, ConsoleError>
where
    S: Surface + ?Sized,
    B: BatchSource + ?Sized,
{
    let Some(batch) = source.next_batch() else {
        return Ok(TickOutcome::Idle);
    };
    log::debug!("rendering batch of {} samples", batch.len());
    renderer.render(surface, &batch)?;
    Ok(TickOutcome::Rendered {
        latest: batch.latest(),
    })
}
/// Stops the [`RefreshTask`] it was taken from. Cheap to clone.
#[derive(Clone, Debug, Default)]
pub struct TaskHandle {
    cancelled: Rc<Cell<bool>>,
}
impl TaskHandle {
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}
/// Repeating timer polled from the UI loop. Due immediately after start,
/// then once per `period` measured from the previous run, until cancelled.
#[derive(Debug)]
pub struct RefreshTask {
    period: Duration,
    next_due: Instant,
    handle: TaskHandle,
}
impl RefreshTask {
    pub fn start(period: Duration, now: Instant) -> Result<Self, ConsoleError> {
        if period.is_zero() {
            return Err(ConsoleError::InvalidRefreshPeriod);
        }
        Ok(Self {
            period,
            next_due: now,
            handle: TaskHandle::default(),
        })
    }
    pub fn handle(&self) -> TaskHandle {
        self.handle.clone()
    }
    pub fn is_cancelled(&self) -> bool {
        self.handle.is_cancelled()
    }
    /// Returns true when a run is due at `now` and re-arms for `now + period`.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.is_cancelled() || now < self.next_due {
            return false;
        }
        self.next_due = now + self.period;
        true
    }
    /// Time left before the next run, `None` once cancelled.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        if self.is_cancelled() {
            return None;
        }
        Some(self.next_due.saturating_duration_since(now))
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::{Canvas, Feed, SampleBatch};
    fn feed_of(n: usize) -> Feed {
        Feed::new((0..n).map(|i| SampleBatch::new(vec![i as f64, i as f64 + 10.0, 3.0])))
    }
    #[test]
    fn n_batches_give_n_renders_then_idle() {
        let renderer = GraphRenderer::default();
        let mut canvas = Canvas::new(250.0, 100.0);
        let mut feed = feed_of(5);
        for i in 0..5 {
            let outcome = tick(&mut canvas, &mut feed, &renderer).unwrap();
            assert_eq!(outcome, TickOutcome::Rendered { latest: Some(3.0) });
            assert_eq!(feed.len(), 4 - i);
        }
        let before = canvas.segments().to_vec();
        assert_eq!(before.len(), 2);
        assert_eq!(tick(&mut canvas, &mut feed, &renderer).unwrap(), TickOutcome::Idle);
        assert_eq!(tick(&mut canvas, &mut feed, &renderer).unwrap(), TickOutcome::Idle);
        assert_eq!(canvas.segments(), before.as_slice());
    }
    #[test]
    fn tick_reports_empty_batch_latest_as_none() {
        let renderer = GraphRenderer::default();
        let mut canvas = Canvas::new(10.0, 10.0);
        let mut feed = Feed::new(vec![SampleBatch::default()]);
        assert_eq!(
            tick(&mut canvas, &mut feed, &renderer).unwrap(),
            TickOutcome::Rendered { latest: None }
        );
        assert!(canvas.segments().is_empty());
    }
    #[test]
    fn first_run_is_immediate_then_periodic() {
        let t0 = Instant::now();
        let period = Duration::from_secs(2);
        let mut task = RefreshTask::start(period, t0).unwrap();
        assert_eq!(task.time_until_next(t0), Some(Duration::ZERO));
        assert!(task.poll(t0));
        assert!(!task.poll(t0));
        assert!(!task.poll(t0 + Duration::from_millis(1999)));
        assert_eq!(
            task.time_until_next(t0 + Duration::from_millis(500)),
            Some(Duration::from_millis(1500))
        );
        assert!(task.poll(t0 + period));
        // late runs re-arm from when they actually ran
        assert!(task.poll(t0 + Duration::from_millis(4500)));
        assert!(!task.poll(t0 + Duration::from_millis(6000)));
        assert!(task.poll(t0 + Duration::from_millis(6500)));
    }
    #[test]
    fn cancelled_task_never_fires() {
        let t0 = Instant::now();
        let mut task = RefreshTask::start(Duration::from_millis(100), t0).unwrap();
        let handle = task.handle();
        assert!(task.poll(t0));
        handle.clone().cancel();
        assert!(task.is_cancelled());
        assert!(!task.poll(t0 + Duration::from_secs(10)));
        assert_eq!(task.time_until_next(t0), None);
    }
    #[test]
    fn zero_period_is_rejected() {
        assert!(matches!(
            RefreshTask::start(Duration::ZERO, Instant::now()),
            Err(ConsoleError::InvalidRefreshPeriod)
        ));
    }
}
