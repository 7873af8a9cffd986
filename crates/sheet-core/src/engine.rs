// File: crates/sheet-core/src/engine.rs
// Summary: LayoutEngine: config -> SheetLayout -> ordered draw commands -> sink.

use log::debug;

use crate::axis::{Axis, AxisFrame, Corridor};
use crate::border::compute_borders;
use crate::color::{ColorSource, FixedColor};
use crate::config::SheetConfig;
use crate::draw::{DrawCommand, LineStyle, ShapeStyle, TextStyle};
use crate::error::Result;
use crate::grid::{build_axis_grid, AxisGrid};
use crate::sink::{replay, RenderSink};
use crate::types::{Color, Point, SheetBox, Size};
use crate::zones::{self, ZoneLabel, ZoneReference};

/// Fully computed geometry of one sheet, before styling.
#[derive(Clone, Debug, PartialEq)]
pub struct SheetLayout {
    pub canvas: Size,
    pub outer: SheetBox,
    pub inner: SheetBox,
    pub columns: AxisGrid,
    pub rows: AxisGrid,
    pub column_labels: Vec<ZoneLabel>,
    pub row_labels: Vec<ZoneLabel>,
}

impl SheetLayout {
    /// Row letter + column number of the zone containing `p`, if `p` lies in the inner box.
    pub fn zone_at(&self, p: Point) -> Option<ZoneReference> {
        if !self.inner.contains_point(p) {
            return None;
        }
        let row = lookup(&self.rows, &self.row_labels, p.y)?;
        let column = lookup(&self.columns, &self.column_labels, p.x)?;
        Some(ZoneReference { row, column })
    }
}

fn lookup(grid: &AxisGrid, labels: &[ZoneLabel], along: f64) -> Option<String> {
    let (side, zone) = zones::zone_index(&grid.frame, grid.divisions, along)?;
    labels
        .iter()
        .find(|l| l.corridor == Corridor::Near && l.side == side && l.zone == zone)
        .map(|l| l.text.clone())
}

/// Validate and compute the geometry. Pure: same config, same layout.
pub fn compute_layout(config: &SheetConfig) -> Result<SheetLayout> {
    config.validate()?;
    let canvas = config.canvas_size_mm;
    let (outer, inner) = compute_borders(canvas, config.padding_mm, config.border_thickness_mm)?;
    debug!(
        "canvas {canvas} mm: outer {} @ {}, inner {} @ {}",
        outer.size, outer.position, inner.size, inner.position
    );

    let t = config.border_thickness_mm;
    let column_frame = AxisFrame::new(Axis::Columns, canvas, &outer, &inner, t);
    let row_frame = AxisFrame::new(Axis::Rows, canvas, &outer, &inner, t);

    let columns = build_axis_grid(column_frame, config.column_divisions);
    let rows = build_axis_grid(row_frame, config.row_divisions);
    let column_labels = zones::sequence_column_labels(&column_frame, config.column_divisions, config.font_size_mm)?;
    let row_labels = zones::sequence_row_labels(&row_frame, config.row_divisions, config.font_size_mm)?;

    Ok(SheetLayout { canvas, outer, inner, columns, rows, column_labels, row_labels })
}

/// Flatten a layout into draw commands: background, outer box, inner box,
/// ticks (columns then rows), labels (columns then rows).
pub fn layout_commands(layout: &SheetLayout, config: &SheetConfig, background: Color) -> Vec<DrawCommand> {
    let tick_count = layout.columns.ticks.len() + layout.rows.ticks.len();
    let label_count = layout.column_labels.len() + layout.row_labels.len();
    let mut out = Vec::with_capacity(3 + tick_count + label_count);

    out.push(DrawCommand::Rectangle {
        position: Point::new(0.0, 0.0),
        size: layout.canvas,
        style: ShapeStyle::filled(background),
    });
    let frame_style = ShapeStyle::outlined(config.stroke_color, config.stroke_width_mm);
    for b in [&layout.outer, &layout.inner] {
        out.push(DrawCommand::Rectangle { position: b.position, size: b.size, style: frame_style });
    }

    for tick in layout.columns.ticks.iter().chain(&layout.rows.ticks) {
        out.push(DrawCommand::Line {
            start: tick.start,
            end: tick.end,
            style: LineStyle {
                color: config.stroke_color,
                width_mm: config.stroke_width_mm * tick.width_multiplier,
            },
        });
    }

    for label in layout.column_labels.iter().chain(&layout.row_labels) {
        out.push(DrawCommand::Text {
            text: label.text.clone(),
            position: label.anchor,
            style: TextStyle {
                color: config.stroke_color,
                font_family: config.font_family.clone(),
                font_size_mm: config.font_size_mm,
                anchor: label.horizontal_anchor,
            },
        });
    }

    debug!("{} commands ({} ticks, {} labels)", out.len(), tick_count, label_count);
    out
}

/// Lays out sheets for one config with an injected background color source.
pub struct LayoutEngine<C: ColorSource = FixedColor> {
    pub config: SheetConfig,
    pub background: C,
}

impl LayoutEngine<FixedColor> {
    /// Background fixed to `config.background_color`.
    pub fn new(config: SheetConfig) -> Self {
        let background = FixedColor(config.background_color);
        Self { config, background }
    }
}

impl<C: ColorSource> LayoutEngine<C> {
    pub fn with_background(config: SheetConfig, background: C) -> Self {
        Self { config, background }
    }

    pub fn layout(&self) -> Result<SheetLayout> {
        compute_layout(&self.config)
    }

    /// All commands for one sheet. Nothing is emitted when validation fails.
    pub fn commands(&mut self) -> Result<Vec<DrawCommand>> {
        let layout = compute_layout(&self.config)?;
        let background = self.background.next_color();
        Ok(layout_commands(&layout, &self.config, background))
    }

    /// Compute, then replay into `sink` and finalize it.
    pub fn render(&mut self, sink: &mut dyn RenderSink) -> Result<()> {
        let commands = self.commands()?;
        replay(&commands, sink)?;
        Ok(())
    }
}
