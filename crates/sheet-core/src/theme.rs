// File: crates/sheet-core/src/theme.rs
// Summary: Named color presets for sheet background and line work.

use crate::types::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub stroke: Color,
}

impl Theme {
    /// Black ink on white stock.
    pub const fn paper() -> Self {
        Self { name: "paper", background: Color::WHITE, stroke: Color::BLACK }
    }

    pub const fn blueprint() -> Self {
        Self {
            name: "blueprint",
            background: Color::rgb(0x1d, 0x4e, 0x89),
            stroke: Color::rgb(0xf0, 0xf4, 0xff),
        }
    }

    pub const fn sepia() -> Self {
        Self {
            name: "sepia",
            background: Color::rgb(0xf4, 0xec, 0xd8),
            stroke: Color::rgb(0x5b, 0x40, 0x2e),
        }
    }

    pub const fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::rgb(18, 18, 20),
            stroke: Color::rgb(235, 235, 245),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::paper(), Theme::blueprint(), Theme::sepia(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to paper.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::paper()
}
