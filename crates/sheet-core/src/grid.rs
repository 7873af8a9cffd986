// File: crates/sheet-core/src/grid.rs
// Summary: Tick marks for one axis, mirrored about the canvas centre line.

use log::debug;

use crate::axis::{AxisFrame, Corridor, Side};
use crate::types::Point;

/// Stroke multiplier for subdivision ticks.
pub const INTERIOR_TICK_WIDTH: f64 = 1.0;
/// Stroke multiplier for the ticks closing each half-axis at the frame boundary.
pub const END_TICK_WIDTH: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickKind {
    End,
    Interior,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    pub start: Point,
    pub end: Point,
    pub width_multiplier: f64,
    pub kind: TickKind,
    pub corridor: Corridor,
    /// Signed offset from the midline along the axis.
    pub offset: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisGrid {
    pub frame: AxisFrame,
    pub divisions: u32,
    pub ticks: Vec<Tick>,
}

impl AxisGrid {
    /// End ticks followed by interior ticks, as emitted.
    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }

    pub fn interior_count(&self) -> usize {
        self.ticks.iter().filter(|t| t.kind == TickKind::Interior).count()
    }

    /// Ticks on one corridor, in emission order.
    pub fn on(&self, corridor: Corridor) -> impl Iterator<Item = &Tick> + '_ {
        self.ticks.iter().filter(move |t| t.corridor == corridor)
    }
}

/// Tick spanning the full corridor at `offset` from the midline, drawn from
/// the outer-box edge inward.
fn corridor_tick(frame: &AxisFrame, corridor: Corridor, offset: f64, kind: TickKind) -> Tick {
    let along = frame.midline + offset;
    let (outer, inner) = frame.corridor_span(corridor);
    let width_multiplier = match kind {
        TickKind::End => END_TICK_WIDTH,
        TickKind::Interior => INTERIOR_TICK_WIDTH,
    };
    Tick {
        start: frame.point(along, outer),
        end: frame.point(along, inner),
        width_multiplier,
        kind,
        corridor,
        offset,
    }
}

/// Build the ticks of one axis.
///
/// Four end ticks sit on the frame boundary (`midline ± half extent`) in the
/// near and far corridors. Then, for `i in 1..divisions`, four interior ticks
/// at `midline ± pitch(i)` on both corridors. Subdividing from the centre
/// line, not per corridor, keeps the grid symmetric under a 180° rotation.
/// Total: `4 * (divisions - 1) + 4`.
pub fn build_axis_grid(frame: AxisFrame, divisions: u32) -> AxisGrid {
    let mut ticks = Vec::with_capacity(4 * divisions as usize);

    let boundary = frame.half_extent();
    for side in [Side::Leading, Side::Trailing] {
        for corridor in Corridor::BOTH {
            ticks.push(corridor_tick(&frame, corridor, side.sign() * boundary, TickKind::End));
        }
    }

    for i in 1..divisions {
        let pitch = frame.pitch(i, divisions);
        for corridor in Corridor::BOTH {
            ticks.push(corridor_tick(&frame, corridor, pitch, TickKind::Interior));
            ticks.push(corridor_tick(&frame, corridor, -pitch, TickKind::Interior));
        }
    }

    debug!(
        "axis {:?}: {} divisions, {} ticks, half extent {:.3} mm",
        frame.axis,
        divisions,
        ticks.len(),
        boundary
    );
    AxisGrid { frame, divisions, ticks }
}
