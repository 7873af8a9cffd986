// File: crates/sheet-core/src/config.rs
// Summary: SheetConfig value object, defaults, TOML loading and validation.

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::paper::{self, Orientation, PaperSize};
use crate::theme::Theme;
use crate::types::{Color, Size};
use crate::zones::LETTERS;

/// Everything needed to lay out one sheet. No other state feeds the layout
/// apart from the injected background color source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SheetConfig {
    pub canvas_size_mm: Size,
    pub padding_mm: f64,
    pub border_thickness_mm: f64,
    pub stroke_width_mm: f64,
    pub stroke_color: Color,
    pub background_color: Color,
    pub font_size_mm: f64,
    pub font_family: String,
    /// Zones per half of the vertical axis (letters).
    pub row_divisions: u32,
    /// Zones per half of the horizontal axis (numbers).
    pub column_divisions: u32,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            canvas_size_mm: paper::A3.size_mm(Orientation::Landscape),
            padding_mm: 10.0,
            border_thickness_mm: 5.0,
            stroke_width_mm: 0.35,
            stroke_color: Color::BLACK,
            background_color: Color::WHITE,
            font_size_mm: 3.5,
            font_family: "sans-serif".to_string(),
            row_divisions: 3,
            column_divisions: 4,
        }
    }
}

impl SheetConfig {
    /// Default styling on a catalog paper size.
    pub fn for_paper(paper: PaperSize, orientation: Orientation) -> Self {
        Self { canvas_size_mm: paper.size_mm(orientation), ..Self::default() }
    }

    pub fn with_theme(mut self, theme: &Theme) -> Self {
        self.background_color = theme.background;
        self.stroke_color = theme.stroke;
        self
    }

    pub fn from_toml_str(src: &str) -> Result<Self> {
        toml::from_str(src).map_err(|e| LayoutError::invalid(format!("config parse error: {e}")))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| LayoutError::invalid(format!("config encode error: {e}")))
    }

    /// Reject anything that cannot yield a well-formed sheet. Border boxes are
    /// checked again (and exactly) by `border::compute_borders`.
    pub fn validate(&self) -> Result<()> {
        let c = self.canvas_size_mm;
        if !c.is_finite() || c.width <= 0.0 || c.height <= 0.0 {
            return Err(LayoutError::invalid(format!(
                "canvas must be positive, got {}x{} mm",
                c.width, c.height
            )));
        }
        require_non_negative("padding_mm", self.padding_mm)?;
        require_positive("border_thickness_mm", self.border_thickness_mm)?;
        require_positive("stroke_width_mm", self.stroke_width_mm)?;
        require_positive("font_size_mm", self.font_size_mm)?;
        if self.row_divisions == 0 {
            return Err(LayoutError::invalid("row_divisions must be at least 1"));
        }
        if self.column_divisions == 0 {
            return Err(LayoutError::invalid("column_divisions must be at least 1"));
        }
        // Row letters run 0..2*d across both halves of the axis.
        let needed = 2 * self.row_divisions as usize;
        if needed > LETTERS.len() {
            return Err(LayoutError::LabelAlphabetExhausted {
                requested: needed,
                available: LETTERS.len(),
            });
        }
        Ok(())
    }
}

fn require_positive(name: &str, v: f64) -> Result<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(LayoutError::invalid(format!("{name} must be positive, got {v}")))
    }
}

fn require_non_negative(name: &str, v: f64) -> Result<()> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(LayoutError::invalid(format!("{name} must be non-negative, got {v}")))
    }
}
