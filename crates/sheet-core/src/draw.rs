// File: crates/sheet-core/src/draw.rs
// Summary: Immutable draw commands and their styles, format-agnostic.

use std::fmt;

use crate::types::{fmt_mm, Color, Point, Size};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    /// SVG `text-anchor` keyword.
    pub const fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// Fill and/or outline for rectangles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeStyle {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width_mm: f64,
}

impl ShapeStyle {
    pub const fn filled(color: Color) -> Self {
        Self { fill: Some(color), stroke: None, stroke_width_mm: 0.0 }
    }
    pub const fn outlined(color: Color, width_mm: f64) -> Self {
        Self { fill: None, stroke: Some(color), stroke_width_mm: width_mm }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle {
    pub color: Color,
    pub width_mm: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub font_family: String,
    pub font_size_mm: f64,
    pub anchor: TextAnchor,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Rectangle { position: Point, size: Size, style: ShapeStyle },
    Line { start: Point, end: Point, style: LineStyle },
    Text { text: String, position: Point, style: TextStyle },
}

impl DrawCommand {
    pub const fn kind(&self) -> &'static str {
        match self {
            DrawCommand::Rectangle { .. } => "rect",
            DrawCommand::Line { .. } => "line",
            DrawCommand::Text { .. } => "text",
        }
    }
}

fn paint(c: Option<Color>) -> String {
    c.map(|c| c.hex()).unwrap_or_else(|| "none".to_string())
}

/// One line per command, every coordinate at fixed precision. Used for
/// recording sinks and golden logs.
impl fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawCommand::Rectangle { position, size, style } => write!(
                f,
                "rect {position} {size} fill={} stroke={} width={}",
                paint(style.fill),
                paint(style.stroke),
                fmt_mm(style.stroke_width_mm)
            ),
            DrawCommand::Line { start, end, style } => write!(
                f,
                "line {start} {end} stroke={} width={}",
                style.color,
                fmt_mm(style.width_mm)
            ),
            DrawCommand::Text { text, position, style } => write!(
                f,
                "text {text:?} {position} anchor={} font={:?} size={} fill={}",
                style.anchor.as_str(),
                style.font_family,
                fmt_mm(style.font_size_mm),
                style.color
            ),
        }
    }
}
