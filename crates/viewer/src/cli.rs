// File: crates/viewer/src/cli.rs
// Summary: Command-line options, mapped onto the core comparison config.

use std::path::{Path, PathBuf};

use chart_core::types::{HEIGHT, WIDTH};
use chart_core::{theme, ComparisonConfig, RenderOptions, DEFAULT_INPUT_PATH, DEFAULT_WINDOW_SIZE};
use clap::Parser;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "lvv-chart", version, about = "Plot list vs. vector benchmark timings with rolling averages")]
pub struct Cli {
    /// Benchmark CSV with columns x, vectime, listtime, vecgain
    #[arg(default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// Rows per trailing rolling-average window
    #[arg(short, long, default_value_t = DEFAULT_WINDOW_SIZE, value_parser = parse_window)]
    pub window: usize,

    /// Color theme
    #[arg(long, default_value = "light", value_parser = ["light", "dark"])]
    pub theme: String,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = WIDTH)]
    pub width: i32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = HEIGHT)]
    pub height: i32,
}

impl Cli {
    pub fn into_config(self) -> ComparisonConfig {
        let (input, used_alt) = resolve_path(&self.input);
        if used_alt {
            info!(path = %input.display(), "extension swapped between .csv/.cvs");
        }
        let render = RenderOptions {
            width: self.width.max(1),
            height: self.height.max(1),
            theme: theme::find(&self.theme),
            ..RenderOptions::default()
        };
        ComparisonConfig { input, window_size: self.window, render }
    }
}

fn parse_window(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("window must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

/// Use `raw` if it exists, else the same path with .csv/.cvs swapped if that exists.
/// Returns (path, used_alt); a path that resolves nowhere is returned as given.
fn resolve_path(raw: &Path) -> (PathBuf, bool) {
    if raw.exists() {
        return (raw.to_path_buf(), false);
    }
    if let Some(alt) = swap_ext(raw) {
        if alt.exists() {
            return (alt, true);
        }
    }
    (raw.to_path_buf(), false)
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    let mut alt = p.to_path_buf();
    match ext.as_str() {
        "cvs" => { alt.set_extension("csv"); Some(alt) }
        "csv" => { alt.set_extension("cvs"); Some(alt) }
        _ => None,
    }
}
