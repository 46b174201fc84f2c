// src/panel.rs
use std::time::{Duration, Instant};
use rand::Rng;
use crate::config::{ConsoleConfig, PanelConfig};
use crate::drivers::{
    synthetic_feed, tick, BitmapSurface, Canvas, ConsoleError, Feed, GraphRenderer, RefreshTask,
    Surface, TickOutcome,
};

/// One sensor readout: labels, a graph canvas and the feed that drives it.
/// Each panel owns its feed and timer outright.
pub struct SensorPanel {
    pub title: String,
    pub status: String,
    unit: String,
    reading: f64,
    canvas: Canvas,
    feed: Feed,
    task: RefreshTask,
}

impl SensorPanel {
    pub fn new(
        config: &PanelConfig,
        canvas: Canvas,
        feed: Feed,
        period: Duration,
        now: Instant,
    ) -> Result<Self, ConsoleError> {
        Ok(Self {
            title: config.title.clone(),
            status: config.status.clone(),
            unit: config.unit.clone(),
            reading: 0.0,
            canvas,
            feed,
            task: RefreshTask::start(period, now)?,
        })
    }

    pub fn reading_label(&self) -> String {
        format!("{}: {}", self.unit, self.reading)
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    pub fn feed(&self) -> &Feed {
        &self.feed
    }

    pub fn task(&self) -> &RefreshTask {
        &self.task
    }

    /// Stops the refresh timer for good; the graph keeps its last drawing.
    pub fn stop(&self) {
        self.task.handle().cancel();
    }

    pub fn is_stopped(&self) -> bool {
        self.task.is_cancelled()
    }

    /// Encodes what the canvas currently shows as an in-memory PNG.
    pub fn snapshot_png(&self) -> Result<Vec<u8>, ConsoleError> {
        let (w, h) = self.canvas.size();
        let mut bitmap = BitmapSurface::new(w.round().max(1.0) as u32, h.round().max(1.0) as u32)?;
        self.canvas.replay(&mut bitmap)?;
        bitmap.to_png()
    }

    /// Runs a tick if the panel's timer is due. `None` when nothing was due.
    pub fn refresh(
        &mut self,
        now: Instant,
        renderer: &GraphRenderer,
    ) -> Result<Option<TickOutcome>, ConsoleError> {
        if !self.task.poll(now) {
            return Ok(None);
        }
        let outcome = tick(&mut self.canvas, &mut self.feed, renderer)?;
        if let TickOutcome::Rendered { latest: Some(value) } = outcome {
            self.reading = value;
        }
        Ok(Some(outcome))
    }
}

/// Builds every configured panel, each with an independently generated feed.
pub fn build_panels<R: Rng + ?Sized>(
    config: &ConsoleConfig,
    rng: &mut R,
    now: Instant,
) -> Result<Vec<SensorPanel>, ConsoleError> {
    config.validate()?;
    let [width, height] = config.canvas_size;
    config
        .panels
        .iter()
        .map(|panel| {
            let feed = synthetic_feed(
                rng,
                &config.feed.batch_ranges,
                config.feed.samples_per_batch,
            )?;
            log::info!("panel '{}' ready with {} batches", panel.title, feed.len());
            SensorPanel::new(
                panel,
                Canvas::new(width, height),
                feed,
                config.refresh_period(),
                now,
            )
        })
        .collect()
}
