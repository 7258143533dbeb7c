// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; benchmark table loading, rolling means, and chart rendering.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod view;
pub mod theme;
pub mod text;
pub mod legend;
pub mod downsample;
pub mod table;
pub mod rolling;
pub mod display;
pub mod comparison;

pub use chart::{Chart, RenderOptions};
pub use series::{LineStyle, Series, StrokePattern};
pub use axis::Axis;
pub use view::ViewState;
pub use theme::Theme;
pub use text::TextShaper;
pub use downsample::lttb;
pub use table::{Table, TableError};
pub use rolling::{rolling_mean, RollingError, RollingMean};
pub use display::ChartDisplay;
pub use comparison::{
    build_comparison_chart, render_comparison_chart, ComparisonConfig, MissingColumns, Outcome,
    DEFAULT_INPUT_PATH, DEFAULT_WINDOW_SIZE, REQUIRED_COLUMNS,
};
