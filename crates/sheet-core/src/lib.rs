// File: crates/sheet-core/src/lib.rs
// Summary: Core library entry point; drawing-sheet frame, zone grid and label layout.

pub mod types;
pub mod error;
pub mod paper;
pub mod config;
pub mod theme;
pub mod color;
pub mod border;
pub mod axis;
pub mod grid;
pub mod zones;
pub mod draw;
pub mod sink;
pub mod engine;

pub use types::{fmt_mm, Color, Point, SheetBox, Size};
pub use error::{LayoutError, SinkError};
pub use paper::{get_size, Orientation, PaperSize};
pub use config::SheetConfig;
pub use theme::Theme;
pub use color::{ColorSource, FixedColor, RandomColor};
pub use border::compute_borders;
pub use axis::{Axis, AxisFrame, Corridor, Side};
pub use grid::{build_axis_grid, AxisGrid, Tick, TickKind};
pub use zones::{ZoneLabel, ZoneReference};
pub use draw::{DrawCommand, LineStyle, ShapeStyle, TextAnchor, TextStyle};
pub use sink::{replay, RecordingSink, RenderSink};
pub use engine::{compute_layout, layout_commands, LayoutEngine, SheetLayout};
