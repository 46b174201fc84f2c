use serde::{Deserialize, Serialize};
use crate::drivers::{ConsoleError, SampleBatch};
/// Pixel position on a surface, origin top-left, y grows downwards.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}
impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);
impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLUE: Rgb = Rgb(0, 0, 255);
}
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: Rgb,
    pub width: f32,
}
impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Rgb::BLUE,
            width: 2.0,
        }
    }
}
/// Drawable 2D area that backs one panel's graph.
pub trait Surface {
    /// Current `(width, height)` in pixels. Queried on every render.
    fn size(&self) -> (f32, f32);
    fn clear(&mut self) -> Result<(), ConsoleError>;
    fn draw_line(&mut self, from: Point, to: Point, style: LineStyle) -> Result<(), ConsoleError>;
}
fn drawable(width: f32, height: f32) -> bool {
    width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0
}
/// Maps a batch onto a `width` x `height` area.
///
/// Sample `i` lands at `x = i * width / (n - 1)`; the batch minimum lands on
/// the bottom edge and the maximum on the top edge. A batch whose samples are
/// all equal becomes a flat line at mid-height; any distinct pair of values,
/// however close or far apart, spans the full height. Batches shorter than two
/// samples and empty areas yield no points.
pub fn plot_points(batch: &SampleBatch, width: f32, height: f32) -> Vec<Point> {
    if batch.len() < 2 || !drawable(width, height) {
        return Vec::new();
    }
    let Some((min, max)) = batch.bounds() else {
        return Vec::new();
    };
    let (w, h) = (width as f64, height as f64);
    let step = w / (batch.len() - 1) as f64;
    // Halving keeps the span finite when `max - min` overflows.
    let scale = if (max - min).is_finite() { 1.0 } else { 0.5 };
    let (lo, span) = (min * scale, max * scale - min * scale);
    batch
        .samples
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let y = if span == 0.0 {
                h / 2.0
            } else {
                h - (v * scale - lo) / span * h
            };
            Point::new((i as f64 * step) as f32, y as f32)
        })
        .collect()
}
/// Clears a surface and draws a batch as a connected polyline.
#[derive(Clone, Copy, Debug, Default)]
pub struct GraphRenderer {
    pub style: LineStyle,
}
impl GraphRenderer {
    pub fn new(style: LineStyle) -> Self {
        Self { style }
    }
    pub fn render<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        batch: &SampleBatch,
    ) -> Result<(), ConsoleError> {
        surface.clear()?;
        let (width, height) = surface.size();
        let points = plot_points(batch, width, height);
        for pair in points.windows(2) {
            surface.draw_line(pair[0], pair[1], self.style)?;
        }
        Ok(())
    }
}
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub style: LineStyle,
}
/// Retained surface: keeps the segments of the last render until the next
/// one replaces them. The GUI paints it every frame.
#[derive(Clone, Debug, Default)]
pub struct Canvas {
    width: f32,
    height: f32,
    segments: Vec<Segment>,
}
impl Canvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            segments: Vec::new(),
        }
    }
    /// Layout may change between renders; drawn content is not rescaled.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
    /// Clears `target` and draws the retained segments onto it.
    pub fn replay<S: Surface + ?Sized>(&self, target: &mut S) -> Result<(), ConsoleError> {
        target.clear()?;
        for seg in &self.segments {
            target.draw_line(seg.from, seg.to, seg.style)?;
        }
        Ok(())
    }
}
impl Surface for Canvas {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
    fn clear(&mut self) -> Result<(), ConsoleError> {
        self.segments.clear();
        Ok(())
    }
    fn draw_line(&mut self, from: Point, to: Point, style: LineStyle) -> Result<(), ConsoleError> {
        self.segments.push(Segment { from, to, style });
        Ok(())
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }
    #[test]
    fn two_samples_span_the_canvas() {
        let mut canvas = Canvas::new(250.0, 100.0);
        GraphRenderer::default()
            .render(&mut canvas, &SampleBatch::new(vec![100.0, 150.0]))
            .unwrap();
        let segments = canvas.segments();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].from, Point::new(0.0, 100.0));
        assert_eq!(segments[0].to, Point::new(250.0, 0.0));
        assert_eq!(segments[0].style, LineStyle::default());
    }
    #[test]
    fn max_maps_to_top_and_min_to_bottom() {
        let batch = SampleBatch::new(vec![72.0, 131.0, 58.0, 164.0, 99.0, 101.0]);
        let points = plot_points(&batch, 300.0, 120.0);
        assert_eq!(points.len(), 6);
        assert!(close(points[3].y, 0.0));
        assert!(close(points[2].y, 120.0));
        assert!(close(points[0].x, 0.0));
        assert!(close(points[5].x, 300.0));
        assert!(close(points[1].x - points[0].x, 60.0));
        assert!(points.iter().all(|p| p.y >= 0.0 && p.y <= 120.0));
    }
    #[test]
    fn short_batches_clear_and_draw_nothing() {
        let renderer = GraphRenderer::default();
        let mut canvas = Canvas::new(250.0, 100.0);
        renderer
            .render(&mut canvas, &SampleBatch::new(vec![1.0, 2.0, 3.0]))
            .unwrap();
        assert_eq!(canvas.segments().len(), 2);
        renderer
            .render(&mut canvas, &SampleBatch::new(vec![5.0]))
            .unwrap();
        assert!(canvas.segments().is_empty());
        renderer
            .render(&mut canvas, &SampleBatch::default())
            .unwrap();
        assert!(canvas.segments().is_empty());
    }
    #[test]
    fn constant_batch_is_flat_at_mid_height() {
        let mut canvas = Canvas::new(90.0, 40.0);
        GraphRenderer::default()
            .render(&mut canvas, &SampleBatch::new(vec![77.0; 4]))
            .unwrap();
        assert_eq!(canvas.segments().len(), 3);
        for seg in canvas.segments() {
            assert!(close(seg.from.y, 20.0));
            assert!(close(seg.to.y, 20.0));
        }
        assert!(close(canvas.segments()[2].to.x, 90.0));
    }
    #[test]
    fn tiny_range_still_spans_full_height() {
        let points = plot_points(&SampleBatch::new(vec![0.0, 1e-17]), 250.0, 100.0);
        assert_eq!(points, vec![Point::new(0.0, 100.0), Point::new(250.0, 0.0)]);
    }
    #[test]
    fn overflowing_range_stays_finite() {
        let points = plot_points(&SampleBatch::new(vec![-1e308, 0.0, 1e308]), 250.0, 100.0);
        assert_eq!(points.len(), 3);
        let points_from_zero = plot_points(&SampleBatch::new(vec![0.0, f64::MAX]), 10.0, 10.0);
        assert_eq!(points_from_zero[0].y, 10.0);
        assert_eq!(points_from_zero[1].y, 0.0);
        assert!(points.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
        assert!(close(points[0].y, 100.0));
        assert!(close(points[1].y, 50.0));
        assert!(close(points[2].y, 0.0));
    }
    #[test]
    fn replay_copies_the_last_render() {
        let mut canvas = Canvas::new(250.0, 100.0);
        GraphRenderer::default()
            .render(&mut canvas, &SampleBatch::new(vec![4.0, 8.0, 6.0]))
            .unwrap();
        let mut copy = Canvas::new(250.0, 100.0);
        copy.draw_line(Point::new(1.0, 1.0), Point::new(2.0, 2.0), LineStyle::default())
            .unwrap();
        canvas.replay(&mut copy).unwrap();
        assert_eq!(copy.segments(), canvas.segments());
    }
    #[test]
    fn empty_area_draws_nothing() {
        let renderer = GraphRenderer::default();
        let batch = SampleBatch::new(vec![1.0, 9.0, 4.0]);
        for (w, h) in [(0.0, 100.0), (250.0, 0.0), (-5.0, 10.0), (f32::NAN, 10.0)] {
            let mut canvas = Canvas::new(w, h);
            renderer.render(&mut canvas, &batch).unwrap();
            assert!(canvas.segments().is_empty());
        }
    }
    #[test]
    fn size_is_read_at_render_time() {
        let renderer = GraphRenderer::default();
        let batch = SampleBatch::new(vec![0.0, 10.0]);
        let mut canvas = Canvas::new(100.0, 50.0);
        renderer.render(&mut canvas, &batch).unwrap();
        assert_eq!(canvas.segments()[0].to, Point::new(100.0, 0.0));
        canvas.resize(400.0, 80.0);
        renderer.render(&mut canvas, &batch).unwrap();
        assert_eq!(canvas.segments().len(), 1);
        assert_eq!(canvas.segments()[0].from, Point::new(0.0, 80.0));
        assert_eq!(canvas.segments()[0].to, Point::new(400.0, 0.0));
    }
}
