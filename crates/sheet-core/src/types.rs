// File: crates/sheet-core/src/types.rs
// Summary: Shared value types (points, sizes, boxes, colors) and numeric constants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Decimal places used whenever a millimetre value crosses the sink interface.
pub const MM_PRECISION: usize = 5;

/// Tolerance used for geometric comparisons in millimetres.
pub const EPSILON_MM: f64 = 1e-9;

/// Format a millimetre value at the fixed interface precision.
pub fn fmt_mm(v: f64) -> String {
    // -0.0 would otherwise print as "-0.00000" and break golden logs
    let v = if v == 0.0 { 0.0 } else { v };
    format!("{:.*}", MM_PRECISION, v)
}

/// A point on the sheet, in millimetres. Origin is the top-left canvas corner,
/// y grows downward.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", fmt_mm(self.x), fmt_mm(self.y))
    }
}

/// Width/height pair in millimetres.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
    pub fn is_finite(&self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", fmt_mm(self.width), fmt_mm(self.height))
    }
}

/// Axis-aligned rectangle centred in a canvas (outer and inner border boxes).
/// Contract: `position * 2 + size == canvas` on both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetBox {
    pub position: Point,
    pub size: Size,
}

impl SheetBox {
    /// Centre a box of `size` inside `canvas`.
    pub fn centered(canvas: Size, size: Size) -> Self {
        Self {
            position: Point::new(
                (canvas.width - size.width) / 2.0,
                (canvas.height - size.height) / 2.0,
            ),
            size,
        }
    }
    pub fn left(&self) -> f64 { self.position.x }
    pub fn top(&self) -> f64 { self.position.y }
    pub fn right(&self) -> f64 { self.position.x + self.size.width }
    pub fn bottom(&self) -> f64 { self.position.y + self.size.height }

    /// True when `other` lies inside `self` (edges may touch).
    pub fn contains_box(&self, other: &SheetBox) -> bool {
        other.left() >= self.left() - EPSILON_MM
            && other.top() >= self.top() - EPSILON_MM
            && other.right() <= self.right() + EPSILON_MM
            && other.bottom() <= self.bottom() + EPSILON_MM
    }

    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }
}

/// 8-bit RGB color, serialized as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(format!("expected #rrggbb color, got `{s}`"));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| format!("invalid hex digits in color `{s}`"))
        };
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Color {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.hex()
    }
}
