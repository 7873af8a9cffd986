// File: crates/sheet-cli/src/render.rs
// Summary: Render sheets to files; `--all` batches run on the rayon pool.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;
use rayon::prelude::*;
use sheet_core::{compute_layout, ColorSource, FixedColor, LayoutEngine, RandomColor};
use sheet_render_skia::SkiaRasterSink;
use sheet_render_svg::SvgSink;

use crate::args::{Format, Sheet};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Background {
    /// The config's `background_color`.
    Fixed,
    /// Pastel pick; seeded runs are reproducible.
    Random(Option<u64>),
}

impl Background {
    /// Distinct but reproducible seeds across a batch.
    fn for_index(self, i: usize) -> Self {
        match self {
            Background::Random(Some(seed)) => Background::Random(Some(seed.wrapping_add(i as u64))),
            other => other,
        }
    }

    fn source(self, sheet: &Sheet) -> Box<dyn ColorSource> {
        match self {
            Background::Fixed => Box::new(FixedColor(sheet.config.background_color)),
            Background::Random(Some(seed)) => Box::new(RandomColor::seeded(seed)),
            Background::Random(None) => Box::new(RandomColor::from_entropy()),
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub struct Output<'a> {
    pub dir: &'a Path,
    pub format: Format,
    pub dpi: f32,
}

pub fn render_sheet(sheet: &Sheet, out: Output<'_>, background: Background) -> Result<PathBuf> {
    // Fail before touching the filesystem.
    compute_layout(&sheet.config).with_context(|| format!("sheet {}", sheet.name))?;

    let path = out.dir.join(sheet.file_name(out.format));
    let canvas = sheet.config.canvas_size_mm;
    let mut engine = LayoutEngine::with_background(sheet.config.clone(), background.source(sheet));
    match out.format {
        Format::Svg => {
            let file = File::create(&path).with_context(|| format!("failed to create '{}'", path.display()))?;
            let mut sink = SvgSink::new(BufWriter::new(file), canvas);
            engine.render(&mut sink)?;
        }
        Format::Png => {
            let mut sink = SkiaRasterSink::to_file(canvas, out.dpi, &path)?;
            engine.render(&mut sink)?;
        }
    }
    info!("wrote {}", path.display());
    Ok(path)
}

/// Each sheet owns its config, color source and sink; results keep input order.
pub fn render_all(sheets: &[Sheet], out: Output<'_>, background: Background) -> Vec<Result<PathBuf>> {
    sheets
        .par_iter()
        .enumerate()
        .map(|(i, sheet)| render_sheet(sheet, out, background.for_index(i)))
        .collect()
}
