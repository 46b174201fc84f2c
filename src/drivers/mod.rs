// src/drivers/mod.rs
// Graph feed and rendering core, independent of the GUI toolkit.
pub mod error;
pub mod plot;
pub mod refresh;
pub mod render;
pub mod source;
pub mod synth;
// Re-exported for the GUI and panel layers
pub use error::ConsoleError;
pub use plot::BitmapSurface;
pub use refresh::{tick, RefreshTask, TickOutcome};
pub use render::{Canvas, GraphRenderer, LineStyle, Surface};
pub use source::{BatchSource, Feed, SampleBatch};
pub use synth::{synthetic_feed, SampleRange};
