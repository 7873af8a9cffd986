// File: crates/sheet-core/src/border.rs
// Summary: Outer and inner border boxes centred in the canvas.

use crate::error::{LayoutError, Result};
use crate::types::{SheetBox, Size};

/// Outer box inset by `padding_mm`; inner box inset by a further
/// `border_thickness_mm`. Both are positioned with the centring formula
/// rather than by offsetting, so odd paddings stay symmetric.
pub fn compute_borders(
    canvas_size_mm: Size,
    padding_mm: f64,
    border_thickness_mm: f64,
) -> Result<(SheetBox, SheetBox)> {
    let outer_size = Size::new(
        canvas_size_mm.width - 2.0 * padding_mm,
        canvas_size_mm.height - 2.0 * padding_mm,
    );
    let inset = padding_mm + border_thickness_mm;
    let inner_size = Size::new(
        canvas_size_mm.width - 2.0 * inset,
        canvas_size_mm.height - 2.0 * inset,
    );

    if !(outer_size.width > 0.0 && outer_size.height > 0.0) {
        return Err(LayoutError::invalid(format!(
            "padding {padding_mm} mm leaves no outer border box on a {canvas_size_mm} mm canvas"
        )));
    }
    if !(inner_size.width > 0.0 && inner_size.height > 0.0) {
        return Err(LayoutError::invalid(format!(
            "padding {padding_mm} mm + border {border_thickness_mm} mm leaves no inner box on a {canvas_size_mm} mm canvas"
        )));
    }

    Ok((
        SheetBox::centered(canvas_size_mm, outer_size),
        SheetBox::centered(canvas_size_mm, inner_size),
    ))
}
