// File: crates/sheet-cli/src/main.rs
// Summary: `sheetgen` entry point; parses flags, renders sheets, reports output paths.

use anyhow::{Context, Result};
use clap::Parser;
use log::error;

mod args;
mod render;

use args::Args;
use render::{Background, Output};

fn main() -> Result<()> {
    let args = Args::parse();
    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let sheets = args.sheets()?;
    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("failed to create output dir '{}'", args.out.display()))?;

    let background = if args.random_background { Background::Random(args.seed) } else { Background::Fixed };
    let out = Output { dir: &args.out, format: args.format, dpi: args.dpi };
    let results = render::render_all(&sheets, out, background);

    let mut failed = 0usize;
    for (sheet, result) in sheets.iter().zip(results) {
        match result {
            Ok(path) => println!("Wrote {}", path.display()),
            Err(e) => {
                error!("{}: {e:#}", sheet.name);
                failed += 1;
            }
        }
    }
    if failed > 0 {
        anyhow::bail!("{failed} of {} sheet(s) failed", sheets.len());
    }
    Ok(())
}
