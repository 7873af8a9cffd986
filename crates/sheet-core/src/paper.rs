// File: crates/sheet-core/src/paper.rs
// Summary: Fixed catalog of standard paper sizes (ISO 216 A series), stored portrait.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::types::Size;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PaperSize {
    pub name: &'static str,
    pub width_mm: u32,
    pub height_mm: u32,
}

pub const A0: PaperSize = PaperSize { name: "A0", width_mm: 841, height_mm: 1189 };
pub const A1: PaperSize = PaperSize { name: "A1", width_mm: 594, height_mm: 841 };
pub const A2: PaperSize = PaperSize { name: "A2", width_mm: 420, height_mm: 594 };
pub const A3: PaperSize = PaperSize { name: "A3", width_mm: 297, height_mm: 420 };
pub const A4: PaperSize = PaperSize { name: "A4", width_mm: 210, height_mm: 297 };

const CATALOG: [PaperSize; 5] = [A0, A1, A2, A3, A4];

/// Every catalog entry, largest first.
pub fn catalog() -> &'static [PaperSize] {
    &CATALOG
}

/// Look up a catalog entry by name (case-insensitive, surrounding whitespace ignored).
pub fn find(name: &str) -> Result<PaperSize, LayoutError> {
    let key = name.trim();
    CATALOG
        .iter()
        .copied()
        .find(|p| p.name.eq_ignore_ascii_case(key))
        .ok_or_else(|| LayoutError::UnknownPaperSize(name.to_string()))
}

/// `(width, height)` in millimetres for a catalog entry, portrait.
pub fn get_size(name: &str) -> Result<(f64, f64), LayoutError> {
    let p = find(name)?;
    Ok((p.width_mm as f64, p.height_mm as f64))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    #[default]
    Landscape,
}

impl Orientation {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "portrait" | "p" => Ok(Orientation::Portrait),
            "landscape" | "l" => Ok(Orientation::Landscape),
            other => Err(format!("unknown orientation `{other}`")),
        }
    }
}

impl PaperSize {
    /// Canvas size for this paper in the given orientation.
    pub fn size_mm(&self, orientation: Orientation) -> Size {
        let (short, long) = (self.width_mm as f64, self.height_mm as f64);
        match orientation {
            Orientation::Portrait => Size::new(short, long),
            Orientation::Landscape => Size::new(long, short),
        }
    }
}

impl fmt::Display for PaperSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl FromStr for PaperSize {
    type Err = LayoutError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        find(s)
    }
}
