// File: crates/sheet-core/src/sink.rs
// Summary: RenderSink contract, command replay, and an in-memory recording sink.

use log::trace;

use crate::draw::{DrawCommand, LineStyle, ShapeStyle, TextStyle};
use crate::error::SinkError;
use crate::types::{Point, Size};

/// Output backend. Draw calls are infallible and may buffer; `finalize` is
/// the only place blocking I/O happens and the only place a sink may fail.
pub trait RenderSink {
    fn draw_rectangle(&mut self, position: Point, size: Size, style: &ShapeStyle);
    fn draw_line(&mut self, start: Point, end: Point, style: &LineStyle);
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);
    fn finalize(&mut self) -> Result<(), SinkError>;
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn draw_rectangle(&mut self, position: Point, size: Size, style: &ShapeStyle) {
        (**self).draw_rectangle(position, size, style)
    }
    fn draw_line(&mut self, start: Point, end: Point, style: &LineStyle) {
        (**self).draw_line(start, end, style)
    }
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        (**self).draw_text(text, position, style)
    }
    fn finalize(&mut self) -> Result<(), SinkError> {
        (**self).finalize()
    }
}

/// Send one command to a sink.
pub fn dispatch(cmd: &DrawCommand, sink: &mut dyn RenderSink) {
    trace!("{cmd}");
    match cmd {
        DrawCommand::Rectangle { position, size, style } => sink.draw_rectangle(*position, *size, style),
        DrawCommand::Line { start, end, style } => sink.draw_line(*start, *end, style),
        DrawCommand::Text { text, position, style } => sink.draw_text(text, *position, style),
    }
}

/// Send every command in order, then finalize. Sink errors are returned unchanged.
pub fn replay(commands: &[DrawCommand], sink: &mut dyn RenderSink) -> Result<(), SinkError> {
    for cmd in commands {
        dispatch(cmd, sink);
    }
    sink.finalize()
}

/// Keeps the formatted command log. Handy for tests and golden files.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub lines: Vec<String>,
    pub finalized: usize,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The log as one newline-terminated string.
    pub fn log(&self) -> String {
        let mut out = String::new();
        for l in &self.lines {
            out.push_str(l);
            out.push('\n');
        }
        out
    }
}

impl RenderSink for RecordingSink {
    fn draw_rectangle(&mut self, position: Point, size: Size, style: &ShapeStyle) {
        let cmd = DrawCommand::Rectangle { position, size, style: *style };
        self.lines.push(cmd.to_string());
    }
    fn draw_line(&mut self, start: Point, end: Point, style: &LineStyle) {
        let cmd = DrawCommand::Line { start, end, style: *style };
        self.lines.push(cmd.to_string());
    }
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        let cmd = DrawCommand::Text { text: text.to_string(), position, style: style.clone() };
        self.lines.push(cmd.to_string());
    }
    fn finalize(&mut self) -> Result<(), SinkError> {
        self.finalized += 1;
        Ok(())
    }
}
