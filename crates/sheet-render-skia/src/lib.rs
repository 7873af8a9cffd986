// File: crates/sheet-render-skia/src/lib.rs
// Summary: Skia raster render sink. Draws in pixels scaled from millimetres and
// encodes a PNG on finalize.

use std::path::{Path, PathBuf};

use log::debug;
use skia_safe as skia;

use sheet_core::{Color, LineStyle, Point, RenderSink, ShapeStyle, SinkError, Size, TextStyle};

pub mod text;

pub use text::TextShaper;

pub const MM_PER_INCH: f32 = 25.4;
pub const DEFAULT_DPI: f32 = 150.0;

fn sk_color(c: Color) -> skia::Color {
    skia::Color::from_argb(255, c.r, c.g, c.b)
}

/// Raster sink over a CPU surface. PNG bytes are available after `finalize`
/// and are also written to `output` when one is set.
pub struct SkiaRasterSink {
    surface: skia::Surface,
    scale: f32,
    shaper: TextShaper,
    output: Option<PathBuf>,
    png: Option<Vec<u8>>,
}

impl SkiaRasterSink {
    /// Surface sized to `canvas` millimetres at `dpi`.
    pub fn new(canvas: Size, dpi: f32) -> Result<Self, SinkError> {
        if !(dpi.is_finite() && dpi > 0.0) {
            return Err(SinkError::Backend(format!("dpi must be positive, got {dpi}")));
        }
        let scale = dpi / MM_PER_INCH;
        let px = |mm: f64| ((mm as f32) * scale).round().max(1.0) as i32;
        let (w, h) = (px(canvas.width), px(canvas.height));
        let surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| SinkError::Backend(format!("failed to create {w}x{h} raster surface")))?;
        debug!("raster surface {w}x{h} px at {dpi} dpi");
        Ok(Self { surface, scale, shaper: TextShaper::new(), output: None, png: None })
    }

    /// Like `new`, writing the PNG to `path` on finalize.
    pub fn to_file(canvas: Size, dpi: f32, path: impl AsRef<Path>) -> Result<Self, SinkError> {
        let mut sink = Self::new(canvas, dpi)?;
        sink.output = Some(path.as_ref().to_path_buf());
        Ok(sink)
    }

    pub fn pixel_size(&self) -> (i32, i32) {
        (self.surface.width(), self.surface.height())
    }

    pub fn png_bytes(&self) -> Option<&[u8]> {
        self.png.as_deref()
    }

    fn px(&self, p: Point) -> skia::Point {
        skia::Point::new(p.x as f32 * self.scale, p.y as f32 * self.scale)
    }

    fn stroke_paint(&self, color: Color, width_mm: f64) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(width_mm as f32 * self.scale);
        paint.set_color(sk_color(color));
        paint
    }
}

impl RenderSink for SkiaRasterSink {
    fn draw_rectangle(&mut self, position: Point, size: Size, style: &ShapeStyle) {
        let origin = self.px(position);
        let rect = skia::Rect::from_xywh(
            origin.x,
            origin.y,
            size.width as f32 * self.scale,
            size.height as f32 * self.scale,
        );
        let stroke = style.stroke.map(|c| self.stroke_paint(c, style.stroke_width_mm));
        let canvas = self.surface.canvas();
        if let Some(fill) = style.fill {
            let mut paint = skia::Paint::default();
            paint.set_anti_alias(true);
            paint.set_style(skia::paint::Style::Fill);
            paint.set_color(sk_color(fill));
            canvas.draw_rect(rect, &paint);
        }
        if let Some(paint) = stroke {
            canvas.draw_rect(rect, &paint);
        }
    }

    fn draw_line(&mut self, start: Point, end: Point, style: &LineStyle) {
        let paint = self.stroke_paint(style.color, style.width_mm);
        let (a, b) = (self.px(start), self.px(end));
        self.surface.canvas().draw_line(a, b, &paint);
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        let at = self.px(position);
        let size = style.font_size_mm as f32 * self.scale;
        let canvas = self.surface.canvas();
        self.shaper.draw_anchored(
            canvas,
            text,
            at.x,
            at.y,
            size,
            sk_color(style.color),
            &style.font_family,
            style.anchor,
        );
    }

    fn finalize(&mut self) -> Result<(), SinkError> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| SinkError::Backend("encode PNG failed".to_string()))?;
        let bytes = data.as_bytes().to_vec();

        if let Some(path) = &self.output {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &bytes)?;
            debug!("wrote {} ({} bytes)", path.display(), bytes.len());
        }
        self.png = Some(bytes);
        Ok(())
    }
}
