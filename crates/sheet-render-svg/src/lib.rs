// File: crates/sheet-render-svg/src/lib.rs
// Summary: SVG render sink. Draw calls buffer markup; finalize writes the document.

use std::fmt::Write as _;
use std::io::Write;

use log::debug;
use sheet_core::{fmt_mm, Color, LineStyle, Point, RenderSink, ShapeStyle, SinkError, Size, TextStyle};

/// Writes one SVG document in millimetre user units (1 unit = 1 mm).
pub struct SvgSink<W: Write> {
    out: W,
    canvas: Size,
    body: String,
    elements: usize,
    finished: bool,
}

impl<W: Write> SvgSink<W> {
    pub fn new(out: W, canvas: Size) -> Self {
        Self { out, canvas, body: String::new(), elements: 0, finished: false }
    }

    /// Give back the writer, e.g. a `Vec<u8>` after finalize.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_document(&mut self) -> std::io::Result<()> {
        let (w, h) = (fmt_mm(self.canvas.width), fmt_mm(self.canvas.height));
        writeln!(self.out, r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#)?;
        writeln!(
            self.out,
            r#"<svg width="{w}mm" height="{h}mm" viewBox="0 0 {w} {h}" version="1.1" xmlns="http://www.w3.org/2000/svg">"#
        )?;
        self.out.write_all(self.body.as_bytes())?;
        writeln!(self.out, "</svg>")?;
        self.out.flush()
    }
}

fn paint(c: Option<Color>) -> String {
    c.map(|c| c.hex()).unwrap_or_else(|| "none".to_string())
}

/// Escape text content and attribute values.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

// Writes into the String body cannot fail.
impl<W: Write> RenderSink for SvgSink<W> {
    fn draw_rectangle(&mut self, position: Point, size: Size, style: &ShapeStyle) {
        let _ = writeln!(
            self.body,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
            fmt_mm(position.x),
            fmt_mm(position.y),
            fmt_mm(size.width),
            fmt_mm(size.height),
            paint(style.fill),
            paint(style.stroke),
            fmt_mm(style.stroke_width_mm)
        );
        self.elements += 1;
    }

    fn draw_line(&mut self, start: Point, end: Point, style: &LineStyle) {
        let _ = writeln!(
            self.body,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
            fmt_mm(start.x),
            fmt_mm(start.y),
            fmt_mm(end.x),
            fmt_mm(end.y),
            style.color,
            fmt_mm(style.width_mm)
        );
        self.elements += 1;
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        let _ = writeln!(
            self.body,
            r#"  <text x="{}" y="{}" text-anchor="{}" font-family="{}" font-size="{}" fill="{}">{}</text>"#,
            fmt_mm(position.x),
            fmt_mm(position.y),
            style.anchor.as_str(),
            escape_xml(&style.font_family),
            fmt_mm(style.font_size_mm),
            style.color,
            escape_xml(text)
        );
        self.elements += 1;
    }

    fn finalize(&mut self) -> Result<(), SinkError> {
        if self.finished {
            return Ok(());
        }
        self.write_document()?;
        self.finished = true;
        debug!("svg document written ({} elements)", self.elements);
        Ok(())
    }
}
