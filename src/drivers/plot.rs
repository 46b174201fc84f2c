use std::io::Cursor;
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb as PixelRgb};
use plotters::prelude::{BitMapBackend, Color, IntoDrawingArea, PathElement, RGBColor};
use crate::drivers::render::{LineStyle, Point, Rgb, Surface};
use crate::drivers::ConsoleError;
/// Offscreen surface backed by an RGB pixel buffer, drawn with plotters.
/// Useful for headless snapshots of a panel graph.
pub struct BitmapSurface {
    width: u32,
    height: u32,
    background: Rgb,
    buffer: Vec<u8>,
}
impl BitmapSurface {
    pub fn new(width: u32, height: u32) -> Result<Self, ConsoleError> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|px| px.checked_mul(3))
            .ok_or(ConsoleError::SurfaceTooLarge { width, height })?;
        Ok(Self {
            width,
            height,
            background: Rgb::WHITE,
            buffer: vec![255u8; len],
        })
    }
    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        let px = self.buffer.get(idx..idx + 3)?;
        Some(Rgb(px[0], px[1], px[2]))
    }
    /// Count of pixels that differ from the background.
    #[cfg(test)]
    pub fn painted_pixels(&self) -> usize {
        let bg = [self.background.0, self.background.1, self.background.2];
        self.buffer.chunks_exact(3).filter(|px| *px != bg).count()
    }
    pub fn to_png(&self) -> Result<Vec<u8>, ConsoleError> {
        let image =
            ImageBuffer::<PixelRgb<u8>, _>::from_raw(self.width, self.height, self.buffer.clone())
                .ok_or_else(|| ConsoleError::Draw("failed to allocate image buffer".into()))?;
        let mut output = Vec::new();
        DynamicImage::ImageRgb8(image).write_to(&mut Cursor::new(&mut output), ImageFormat::Png)?;
        Ok(output)
    }
}
fn to_pixel(p: Point) -> (i32, i32) {
    (p.x.round() as i32, p.y.round() as i32)
}
impl Surface for BitmapSurface {
    fn size(&self) -> (f32, f32) {
        (self.width as f32, self.height as f32)
    }
    fn clear(&mut self) -> Result<(), ConsoleError> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        let Rgb(r, g, b) = self.background;
        let root = BitMapBackend::with_buffer(&mut self.buffer, (self.width, self.height))
            .into_drawing_area();
        root.fill(&RGBColor(r, g, b))?;
        root.present()?;
        Ok(())
    }
    fn draw_line(&mut self, from: Point, to: Point, style: LineStyle) -> Result<(), ConsoleError> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        let Rgb(r, g, b) = style.color;
        let stroke = RGBColor(r, g, b).stroke_width(style.width.round().max(1.0) as u32);
        let root = BitMapBackend::with_buffer(&mut self.buffer, (self.width, self.height))
            .into_drawing_area();
        root.draw(&PathElement::new(vec![to_pixel(from), to_pixel(to)], stroke))?;
        root.present()?;
        Ok(())
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::{GraphRenderer, SampleBatch};
    fn near(surface: &BitmapSurface, x: u32, y: u32, color: Rgb) -> bool {
        (x.saturating_sub(2)..=x + 2)
            .flat_map(|px| (y.saturating_sub(2)..=y + 2).map(move |py| (px, py)))
            .any(|(px, py)| surface.pixel(px, py) == Some(color))
    }
    #[test]
    fn renders_diagonal_and_clears() {
        let mut surface = BitmapSurface::new(250, 100).unwrap();
        assert_eq!(surface.painted_pixels(), 0);
        let renderer = GraphRenderer::default();
        renderer
            .render(&mut surface, &SampleBatch::new(vec![100.0, 150.0]))
            .unwrap();
        assert!(surface.painted_pixels() > 0);
        assert!(near(&surface, 125, 50, Rgb::BLUE));
        assert_eq!(surface.pixel(240, 95), Some(Rgb::WHITE));
        renderer
            .render(&mut surface, &SampleBatch::new(vec![3.0]))
            .unwrap();
        assert_eq!(surface.painted_pixels(), 0);
    }
    #[test]
    fn snapshot_encodes_png() {
        let mut surface = BitmapSurface::new(64, 32).unwrap();
        GraphRenderer::default()
            .render(&mut surface, &SampleBatch::new(vec![1.0, 4.0, 2.0]))
            .unwrap();
        let png = surface.to_png().unwrap();
        assert_eq!(&png[..4], &[0x89, b'P', b'N', b'G']);
    }
    #[test]
    fn pixel_outside_is_none() {
        let surface = BitmapSurface::new(4, 4).unwrap();
        assert_eq!(surface.pixel(4, 0), None);
        assert_eq!(surface.pixel(0, 4), None);
    }
    #[test]
    fn oversized_buffer_is_rejected() {
        assert!(matches!(
            BitmapSurface::new(u32::MAX, u32::MAX),
            Err(ConsoleError::SurfaceTooLarge { .. })
        ));
        let empty = BitmapSurface::new(0, 7).unwrap();
        assert_eq!(empty.size(), (0.0, 7.0));
    }
}
