// File: crates/sheet-core/src/axis.rs
// Summary: Per-axis frame geometry: midline, half-extent and the two corridors.
//
// Both axes share one algorithm. Coordinates are expressed as `along` (the
// direction being subdivided) and `across` (through the corridor), and mapped
// back to sheet x/y by `AxisFrame::point`.

use crate::types::{Point, SheetBox, Size};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Vertical axis subdivided into lettered rows; corridors left and right.
    Rows,
    /// Horizontal axis subdivided into numbered columns; corridors top and bottom.
    Columns,
}

/// Which of an axis' two corridors. `Near` sits at the outer-box edge closest
/// to the origin, `Far` is its mirror across the canvas centre.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corridor {
    Near,
    Far,
}

impl Corridor {
    pub const BOTH: [Corridor; 2] = [Corridor::Near, Corridor::Far];
}

/// Half of an axis relative to the midline. `Leading` is the smaller
/// coordinate (top or left), `Trailing` the larger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Leading,
    Trailing,
}

impl Side {
    pub const fn sign(&self) -> f64 {
        match self {
            Side::Leading => -1.0,
            Side::Trailing => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisFrame {
    pub axis: Axis,
    /// Canvas centre along the subdivided direction.
    pub midline: f64,
    /// Inner-box extent along the subdivided direction.
    pub axis_length: f64,
    /// Outer-box edge (across) on the near corridor.
    pub near_edge: f64,
    /// Mirror of `near_edge` across the canvas.
    pub far_edge: f64,
    pub corridor_width: f64,
}

impl AxisFrame {
    pub fn new(axis: Axis, canvas: Size, outer: &SheetBox, inner: &SheetBox, corridor_width: f64) -> Self {
        let (midline, axis_length, near_edge, canvas_across) = match axis {
            Axis::Rows => (canvas.height / 2.0, inner.size.height, outer.left(), canvas.width),
            Axis::Columns => (canvas.width / 2.0, inner.size.width, outer.top(), canvas.height),
        };
        Self {
            axis,
            midline,
            axis_length,
            near_edge,
            far_edge: canvas_across - near_edge,
            corridor_width,
        }
    }

    /// Map axis-relative coordinates to a sheet point.
    pub fn point(&self, along: f64, across: f64) -> Point {
        match self.axis {
            Axis::Rows => Point::new(across, along),
            Axis::Columns => Point::new(along, across),
        }
    }

    /// Distance from the midline to the frame boundary.
    pub fn half_extent(&self) -> f64 {
        self.axis_length / 2.0
    }

    /// Offset of the `i`-th subdivision from the midline. `pitch(divisions)`
    /// lands on the frame boundary.
    pub fn pitch(&self, i: u32, divisions: u32) -> f64 {
        i as f64 * (self.axis_length / 2.0) / divisions as f64
    }

    /// `(outer edge, inner edge)` of a corridor, across the axis.
    pub fn corridor_span(&self, corridor: Corridor) -> (f64, f64) {
        match corridor {
            Corridor::Near => (self.near_edge, self.near_edge + self.corridor_width),
            Corridor::Far => (self.far_edge, self.far_edge - self.corridor_width),
        }
    }

    pub fn corridor_center(&self, corridor: Corridor) -> f64 {
        let (outer, inner) = self.corridor_span(corridor);
        (outer + inner) / 2.0
    }
}
