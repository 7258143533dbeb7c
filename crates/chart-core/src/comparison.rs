// File: crates/chart-core/src/comparison.rs
// Summary: List-vs-vector benchmark chart: load CSV, check columns, add rolling means, show six lines.

use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use skia_safe as skia;
use tracing::{debug, info, warn};

use crate::display::ChartDisplay;
use crate::rolling::rolling_mean;
use crate::table::Table;
use crate::theme::{BLUE, GREEN, ORANGE};
use crate::{Axis, Chart, RenderOptions, Series};

pub const DEFAULT_INPUT_PATH: &str = "lvv/out.csv";
pub const DEFAULT_WINDOW_SIZE: usize = 2000;

/// Columns the benchmark writes, in the order missing ones are reported.
pub const REQUIRED_COLUMNS: [&str; 4] = ["x", "vectime", "listtime", "vecgain"];

pub const TITLE: &str = "List vs. Vector Performance Comparison";
pub const X_LABEL: &str = "Number of Elements";
pub const Y_LABEL: &str = "Time (ns)";

struct Curve {
    column: &'static str,
    label: &'static str,
    short: &'static str,
    color: skia::Color,
}

const CURVES: [Curve; 3] = [
    Curve { column: "vectime", label: "std::vec time", short: "std::vec time", color: BLUE },
    Curve { column: "listtime", label: "std::list time", short: "std::list time", color: ORANGE },
    Curve { column: "vecgain", label: "Speedup using std::vec", short: "Speedup", color: GREEN },
];

#[derive(Clone, Debug)]
pub struct ComparisonConfig {
    pub input: PathBuf,
    pub window_size: usize,
    pub render: RenderOptions,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            window_size: DEFAULT_WINDOW_SIZE,
            render: RenderOptions::default(),
        }
    }
}

/// Required columns absent from the input, in `REQUIRED_COLUMNS` order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissingColumns(pub Vec<String>);

impl fmt::Display for MissingColumns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: The CSV file is missing the following columns: {}", self.0.join(", "))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Rendered,
    MissingColumns(MissingColumns),
}

pub fn check_columns(table: &Table) -> Result<(), MissingColumns> {
    let missing = table.missing_columns(&REQUIRED_COLUMNS);
    if missing.is_empty() { Ok(()) } else { Err(MissingColumns(missing)) }
}

pub fn rolling_column_name(base: &str) -> String {
    format!("rolling_avg_{base}")
}

/// Append `rolling_avg_<col>` for each measured column.
pub fn add_rolling_averages(table: &mut Table, window_size: usize) -> Result<()> {
    for curve in &CURVES {
        let base = table
            .column(curve.column)
            .with_context(|| format!("reading column '{}'", curve.column))?;
        let avg = rolling_mean(base, window_size)?;
        let defined = avg.iter().filter(|v| v.is_some()).count();
        debug!(column = curve.column, window_size, defined, "rolling average");
        table.insert_column(rolling_column_name(curve.column), avg)?;
    }
    Ok(())
}

/// Raw curves as solid lines, their rolling means dashed in the same color.
/// Expects the rolling columns from [`add_rolling_averages`].
pub fn build_comparison_chart(table: &Table, window_size: usize) -> Result<Chart> {
    let x = table.column("x").context("reading column 'x'")?;

    let mut chart = Chart::new();
    chart.title = TITLE.to_string();
    chart.x_axis = Axis::new(X_LABEL, 0.0, 1.0);
    chart.y_axis = Axis::new(Y_LABEL, 0.0, 1.0);

    for curve in &CURVES {
        let y = table
            .column(curve.column)
            .with_context(|| format!("reading column '{}'", curve.column))?;
        chart.add_series(Series::from_columns(curve.label, x, y).with_color(curve.color));
    }
    for curve in &CURVES {
        let name = rolling_column_name(curve.column);
        let y = table
            .column(&name)
            .with_context(|| format!("reading derived column '{name}'"))?;
        let label = format!("{window_size}-Rolling Avg of {}", curve.short);
        chart.add_series(Series::from_columns(label, x, y).with_color(curve.color).dashed());
    }

    chart.autoscale_axes(0.05);
    Ok(chart)
}

/// Load `config.input`, and either hand the comparison chart to `display` or
/// print which required columns are missing. Load failures are returned as errors.
pub fn render_comparison_chart<D>(config: &ComparisonConfig, display: &mut D) -> Result<Outcome>
where
    D: ChartDisplay + ?Sized,
{
    let mut table = Table::from_path(&config.input)
        .with_context(|| format!("failed to load CSV '{}'", config.input.display()))?;
    info!(rows = table.len(), path = %config.input.display(), "loaded benchmark table");

    if let Err(missing) = check_columns(&table) {
        warn!(missing = ?missing.0, "required columns absent; not rendering");
        println!("{missing}");
        return Ok(Outcome::MissingColumns(missing));
    }
    anyhow::ensure!(config.window_size > 0, "rolling window size must be at least 1");

    add_rolling_averages(&mut table, config.window_size)?;
    let chart = build_comparison_chart(&table, config.window_size)?;

    info!(series = chart.series.len(), "showing chart");
    display.show(&chart, &config.render)?;
    Ok(Outcome::Rendered)
}
