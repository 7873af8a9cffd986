// File: crates/sheet-core/src/zones.rs
// Summary: Zone label sequencing (row letters, column numbers) and label anchors.
//
// Each half-axis holds `divisions` zones, numbered 1 (touching the midline)
// to `divisions` (touching the frame boundary). Zones 1..divisions-1 are
// labelled inside the pitch loop; the outermost zone on each side is the
// boundary zone and gets its own post-loop rule. Row and column rules are
// separate types because their boundary offsets differ.

use std::fmt;

use crate::axis::{AxisFrame, Corridor, Side};
use crate::draw::TextAnchor;
use crate::error::{LayoutError, Result};
use crate::types::{Point, EPSILON_MM};

/// Row label alphabet.
pub const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// `index`-th uppercase letter (0 = `A`).
pub fn letter_at(index: usize) -> Result<String> {
    LETTERS
        .as_bytes()
        .get(index)
        .map(|b| char::from(*b).to_string())
        .ok_or(LayoutError::LabelAlphabetExhausted {
            requested: index + 1,
            available: LETTERS.len(),
        })
}

/// Labelling rule for one axis. Both methods return `(trailing, leading)`.
pub trait ZoneRule {
    /// Labels for the zones ending at interior pitch `i` (`1 <= i < divisions`).
    fn interior(&self, i: u32, divisions: u32) -> Result<(String, String)>;
    /// Labels for the two boundary zones, given the last loop index
    /// `i_last = divisions - 1`.
    fn boundary(&self, i_last: u32, divisions: u32) -> Result<(String, String)>;
}

/// Letters: trailing side counts up from `letter(d)`, leading side counts
/// down from `letter(d - 1)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct RowLetters;

impl ZoneRule for RowLetters {
    fn interior(&self, i: u32, divisions: u32) -> Result<(String, String)> {
        let (d, i) = (divisions as usize, i as usize);
        Ok((letter_at(d - 1 + i)?, letter_at(d - i)?))
    }

    fn boundary(&self, i_last: u32, divisions: u32) -> Result<(String, String)> {
        let (d, i) = (divisions as usize, i_last as usize);
        Ok((letter_at(d + i)?, letter_at(d - 1 - i)?))
    }
}

/// Numbers: trailing side counts up from `d + 1`, leading side counts down
/// from `d`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ColumnNumbers;

impl ZoneRule for ColumnNumbers {
    fn interior(&self, i: u32, divisions: u32) -> Result<(String, String)> {
        Ok(((divisions + i).to_string(), (divisions + 1 - i).to_string()))
    }

    fn boundary(&self, i_last: u32, divisions: u32) -> Result<(String, String)> {
        Ok(((divisions + 1 + i_last).to_string(), (divisions - i_last).to_string()))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ZoneLabel {
    pub text: String,
    pub anchor: Point,
    pub horizontal_anchor: TextAnchor,
    pub corridor: Corridor,
    pub side: Side,
    /// 1 at the midline, `divisions` at the frame boundary.
    pub zone: u32,
}

/// Anchor for zone `zone` on `side` of `corridor`: midway between the ticks
/// bounding the zone, in the middle of the corridor, with the baseline
/// dropped by `(font_size - 1) / 2` so glyphs sit centred in the band.
pub fn label_anchor(
    frame: &AxisFrame,
    divisions: u32,
    corridor: Corridor,
    side: Side,
    zone: u32,
    font_size_mm: f64,
) -> Point {
    let inner = frame.pitch(zone - 1, divisions);
    let outer = frame.pitch(zone, divisions);
    let along = frame.midline + side.sign() * (inner + outer) / 2.0;
    let mut p = frame.point(along, frame.corridor_center(corridor));
    p.y += (font_size_mm - 1.0) / 2.0;
    p
}

/// Label every zone of one axis on both corridors.
pub fn sequence_labels(
    frame: &AxisFrame,
    divisions: u32,
    font_size_mm: f64,
    rule: &dyn ZoneRule,
) -> Result<Vec<ZoneLabel>> {
    let mut labels = Vec::with_capacity(4 * divisions as usize);
    let push_pair = |labels: &mut Vec<ZoneLabel>, zone: u32, (trailing, leading): (String, String)| {
        for corridor in Corridor::BOTH {
            for (side, text) in [(Side::Trailing, &trailing), (Side::Leading, &leading)] {
                labels.push(ZoneLabel {
                    text: text.clone(),
                    anchor: label_anchor(frame, divisions, corridor, side, zone, font_size_mm),
                    horizontal_anchor: TextAnchor::Middle,
                    corridor,
                    side,
                    zone,
                });
            }
        }
    };

    for i in 1..divisions {
        push_pair(&mut labels, i, rule.interior(i, divisions)?);
    }

    // Boundary zones: one symbol beyond the loop's stride on each side.
    let i_last = divisions - 1;
    push_pair(&mut labels, divisions, rule.boundary(i_last, divisions)?);

    Ok(labels)
}

pub fn sequence_row_labels(frame: &AxisFrame, divisions: u32, font_size_mm: f64) -> Result<Vec<ZoneLabel>> {
    sequence_labels(frame, divisions, font_size_mm, &RowLetters)
}

pub fn sequence_column_labels(frame: &AxisFrame, divisions: u32, font_size_mm: f64) -> Result<Vec<ZoneLabel>> {
    sequence_labels(frame, divisions, font_size_mm, &ColumnNumbers)
}

/// Zone containing coordinate `along`, or `None` past the frame boundary.
pub fn zone_index(frame: &AxisFrame, divisions: u32, along: f64) -> Option<(Side, u32)> {
    let offset = along - frame.midline;
    let half = frame.half_extent();
    if offset.abs() > half + EPSILON_MM {
        return None;
    }
    let side = if offset < 0.0 { Side::Leading } else { Side::Trailing };
    let step = half / divisions as f64;
    let zone = ((offset.abs() / step).ceil() as u32).clamp(1, divisions);
    Some((side, zone))
}

/// Letter + number pair identifying a region of the sheet.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ZoneReference {
    pub row: String,
    pub column: String,
}

impl fmt::Display for ZoneReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.column)
    }
}
