// File: crates/sheet-cli/src/args.rs
// Summary: Command-line flags and how they fold into per-sheet configs.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, warn};
use sheet_core::{paper, theme, Orientation, PaperSize, SheetConfig, Size};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Svg,
    Png,
}

impl Format {
    pub const fn extension(self) -> &'static str {
        match self {
            Format::Svg => "svg",
            Format::Png => "png",
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "sheetgen", version, about = "Render drawing-sheet frames with zone reference grids")]
pub struct Args {
    /// Catalog paper size (A0..A4)
    #[arg(long)]
    pub paper: Option<String>,

    /// portrait or landscape
    #[arg(long)]
    pub orientation: Option<Orientation>,

    /// TOML file with sheet settings; flags override it
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(long, value_name = "MM")]
    pub padding: Option<f64>,

    /// Border band thickness
    #[arg(long, value_name = "MM")]
    pub thickness: Option<f64>,

    #[arg(long, value_name = "MM")]
    pub stroke_width: Option<f64>,

    #[arg(long, value_name = "MM")]
    pub font_size: Option<f64>,

    #[arg(long)]
    pub font_family: Option<String>,

    /// Zones per half of the vertical axis (letters)
    #[arg(long)]
    pub rows: Option<u32>,

    /// Zones per half of the horizontal axis (numbers)
    #[arg(long)]
    pub columns: Option<u32>,

    /// Color preset: paper, blueprint, sepia or dark
    #[arg(long)]
    pub theme: Option<String>,

    /// Pick a random pastel background per sheet
    #[arg(long)]
    pub random_background: bool,

    #[arg(long, requires = "random_background")]
    pub seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = Format::Svg)]
    pub format: Format,

    /// Raster resolution for PNG output
    #[arg(long, default_value_t = sheet_render_skia::DEFAULT_DPI)]
    pub dpi: f32,

    #[arg(long, value_name = "DIR", default_value = ".")]
    pub out: PathBuf,

    /// Render every catalog paper size
    #[arg(long, conflicts_with = "paper")]
    pub all: bool,

    #[arg(short, long)]
    pub verbose: bool,
}

/// One sheet to render: its config plus the pieces of its file name.
#[derive(Clone, Debug)]
pub struct Sheet {
    pub name: String,
    pub orientation: Orientation,
    pub config: SheetConfig,
}

impl Sheet {
    fn on_paper(paper: PaperSize, orientation: Orientation, base: &SheetConfig) -> Self {
        let config = SheetConfig { canvas_size_mm: paper.size_mm(orientation), ..base.clone() };
        Self { name: paper.name.to_string(), orientation, config }
    }

    /// Keep the configured canvas, turning it if another orientation was asked for.
    fn from_canvas(mut config: SheetConfig, orientation: Option<Orientation>) -> Self {
        let c = config.canvas_size_mm;
        let current = if c.width >= c.height { Orientation::Landscape } else { Orientation::Portrait };
        let orientation = orientation.unwrap_or(current);
        if orientation != current {
            config.canvas_size_mm = Size::new(c.height, c.width);
        }
        let (short, long) = (c.width.min(c.height), c.width.max(c.height));
        let name = paper::catalog()
            .iter()
            .find(|p| p.width_mm as f64 == short && p.height_mm as f64 == long)
            .map_or("custom", |p| p.name);
        Self { name: name.to_string(), orientation, config }
    }

    pub fn file_name(&self, format: Format) -> String {
        format!("sheet_{}_{}.{}", self.name, self.orientation, format.extension())
    }
}

impl Args {
    /// Defaults, then the config file, then the theme, then explicit flags.
    pub fn base_config(&self) -> Result<SheetConfig> {
        let mut cfg = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("failed to read config '{}'", path.display()))?;
                SheetConfig::from_toml_str(&text)
                    .with_context(|| format!("invalid config '{}'", path.display()))?
            }
            None => SheetConfig::default(),
        };

        if let Some(name) = &self.theme {
            if !theme::presets().iter().any(|t| t.name.eq_ignore_ascii_case(name)) {
                warn!("unknown theme `{name}`, using paper");
            }
            cfg = cfg.with_theme(&theme::find(name));
        }
        if let Some(v) = self.padding {
            cfg.padding_mm = v;
        }
        if let Some(v) = self.thickness {
            cfg.border_thickness_mm = v;
        }
        if let Some(v) = self.stroke_width {
            cfg.stroke_width_mm = v;
        }
        if let Some(v) = self.font_size {
            cfg.font_size_mm = v;
        }
        if let Some(v) = &self.font_family {
            cfg.font_family = v.clone();
        }
        if let Some(v) = self.rows {
            cfg.row_divisions = v;
        }
        if let Some(v) = self.columns {
            cfg.column_divisions = v;
        }
        Ok(cfg)
    }

    pub fn sheets(&self) -> Result<Vec<Sheet>> {
        let base = self.base_config()?;
        let sheets = if self.all {
            let orientation = self.orientation.unwrap_or_default();
            paper::catalog().iter().map(|p| Sheet::on_paper(*p, orientation, &base)).collect()
        } else {
            let sheet = match &self.paper {
                Some(name) => Sheet::on_paper(paper::find(name)?, self.orientation.unwrap_or_default(), &base),
                None => Sheet::from_canvas(base, self.orientation),
            };
            vec![sheet]
        };
        debug!("{} sheet(s) queued", sheets.len());
        Ok(sheets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheet_core::{Color, Theme};

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("sheetgen").chain(args.iter().copied())).expect("parse")
    }

    #[test]
    fn defaults_to_a3_landscape_svg() {
        let args = parse(&[]);
        assert_eq!(args.format, Format::Svg);
        let sheets = args.sheets().unwrap();
        assert_eq!(sheets.len(), 1);
        assert_eq!(sheets[0].file_name(Format::Svg), "sheet_A3_landscape.svg");
        assert_eq!(sheets[0].config, SheetConfig::default());
    }

    #[test]
    fn paper_and_orientation_pick_the_canvas() {
        let sheets = parse(&["--paper", "a4", "--orientation", "portrait", "--format", "png"]).sheets().unwrap();
        assert_eq!(sheets[0].config.canvas_size_mm, Size::new(210.0, 297.0));
        assert_eq!(sheets[0].file_name(Format::Png), "sheet_A4_portrait.png");
    }

    #[test]
    fn unknown_paper_is_an_error() {
        let err = parse(&["--paper", "B5"]).sheets().unwrap_err();
        assert!(format!("{err:#}").contains("B5"), "{err:#}");
    }

    #[test]
    fn flags_override_config_file() {
        let dir = PathBuf::from("target/test_out");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("cli_precedence.toml");
        fs::write(&path, "padding_mm = 20.0\nrow_divisions = 5\nfont_family = \"serif\"\n").unwrap();

        let args = parse(&["--config", path.to_str().unwrap(), "--rows", "2", "--theme", "blueprint"]);
        let cfg = args.base_config().unwrap();
        assert_eq!(cfg.padding_mm, 20.0);
        assert_eq!(cfg.font_family, "serif");
        assert_eq!(cfg.row_divisions, 2);
        assert_eq!(cfg.background_color, Theme::blueprint().background);
        assert_eq!(cfg.column_divisions, 4);
    }

    #[test]
    fn orientation_turns_a_configured_canvas() {
        let dir = PathBuf::from("target/test_out");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("cli_canvas.toml");
        fs::write(&path, "canvas_size_mm = { width = 297.0, height = 210.0 }\n").unwrap();

        let sheets = parse(&["--config", path.to_str().unwrap(), "--orientation", "portrait"]).sheets().unwrap();
        assert_eq!(sheets[0].config.canvas_size_mm, Size::new(210.0, 297.0));
        assert_eq!(sheets[0].name, "A4");

        let custom = Sheet::from_canvas(
            SheetConfig { canvas_size_mm: Size::new(100.0, 50.0), ..SheetConfig::default() },
            None,
        );
        assert_eq!(custom.file_name(Format::Svg), "sheet_custom_landscape.svg");
    }

    #[test]
    fn all_covers_the_catalog() {
        let sheets = parse(&["--all"]).sheets().unwrap();
        let names: Vec<_> = sheets.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["A0", "A1", "A2", "A3", "A4"]);
        assert!(sheets.iter().all(|s| s.orientation == Orientation::Landscape));
    }

    #[test]
    fn conflicting_and_dependent_flags_are_rejected() {
        let bin = std::iter::once("sheetgen");
        assert!(Args::try_parse_from(bin.clone().chain(["--all", "--paper", "A4"])).is_err());
        assert!(Args::try_parse_from(bin.clone().chain(["--seed", "7"])).is_err());
        assert!(Args::try_parse_from(bin.chain(["--orientation", "sideways"])).is_err());
    }

    #[test]
    fn unknown_theme_falls_back_to_paper() {
        let cfg = parse(&["--theme", "neon"]).base_config().unwrap();
        assert_eq!(cfg.background_color, Color::WHITE);
        assert_eq!(cfg.stroke_color, Color::BLACK);
    }
}
