// File: crates/viewer/src/main.rs
// Summary: Loads list-vs-vector benchmark timings and shows the comparison chart in a window.
//
// Run with: `RUST_LOG=debug lvv-chart [path/to/out.csv] [--window 2000]`

mod cli;
mod window;

use anyhow::Result;
use chart_core::{render_comparison_chart, Outcome};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::window::WindowDisplay;

fn main() -> Result<()> {
    // RUST_LOG controls verbosity (default: info)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Cli::parse().into_config();
    info!(
        input = %config.input.display(),
        window = config.window_size,
        theme = config.render.theme.name,
        "lvv-chart v{}",
        env!("CARGO_PKG_VERSION")
    );

    let mut display = WindowDisplay::new();
    match render_comparison_chart(&config, &mut display)? {
        Outcome::Rendered => info!("done"),
        // the missing-column message has already been printed
        Outcome::MissingColumns(_) => {}
    }
    Ok(())
}
