// src/config.rs
use std::path::Path;
use std::time::Duration;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use crate::drivers::{ConsoleError, LineStyle, SampleRange};

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV: &str = "BLP_CONSOLE_CONFIG";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub title: String,
    /// Free text shown under the title.
    pub status: String,
    /// Prefix of the reading label, e.g. "PSI".
    pub unit: String,
}

impl PanelConfig {
    pub fn new(title: &str, unit: &str) -> Self {
        Self {
            title: title.to_owned(),
            status: "Good/Error".to_owned(),
            unit: unit.to_owned(),
        }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self::new("Sensor", "PSI")
    }
}

/// Synthetic data each panel is seeded with.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub samples_per_batch: usize,
    /// One batch per range, consumed in this order.
    pub batch_ranges: Vec<SampleRange>,
    /// Fixed seed for reproducible feeds; fresh entropy when absent.
    pub seed: Option<u64>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            samples_per_batch: 10,
            batch_ranges: vec![
                SampleRange::new(50, 150),
                SampleRange::new(60, 160),
                SampleRange::new(55, 155),
                SampleRange::new(65, 165),
                SampleRange::new(50, 150),
            ],
            seed: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub window_title: String,
    pub window_size: [f32; 2],
    pub refresh_period_ms: u64,
    pub canvas_size: [f32; 2],
    pub line: LineStyle,
    pub feed: FeedConfig,
    pub panels: Vec<PanelConfig>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        let mut panels = vec![
            PanelConfig::new("Thrust", "LBF"),
            PanelConfig::new("Temp", "DEG F"),
        ];
        panels.extend((1..=5).map(|i| PanelConfig::new(&format!("Pressure {i}"), "PSI")));
        Self {
            window_title: "BLP GUI".to_owned(),
            window_size: [900.0, 700.0],
            refresh_period_ms: 2000,
            canvas_size: [250.0, 100.0],
            line: LineStyle::default(),
            feed: FeedConfig::default(),
            panels,
        }
    }
}

impl ConsoleConfig {
    /// Reads the file named by [`CONFIG_ENV`], or falls back to defaults.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => {
                log::info!("{CONFIG_ENV} not set, using built-in console layout");
                Ok(Self::default())
            }
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = Self::from_json(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        log::info!("loaded console config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConsoleError> {
        if self.refresh_period_ms == 0 {
            return Err(ConsoleError::InvalidRefreshPeriod);
        }
        if self.panels.is_empty() {
            return Err(ConsoleError::NoPanels);
        }
        for range in &self.feed.batch_ranges {
            range.validate()?;
        }
        Ok(())
    }

    pub fn refresh_period(&self) -> Duration {
        Duration::from_millis(self.refresh_period_ms)
    }
}
