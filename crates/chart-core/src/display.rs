// File: crates/chart-core/src/display.rs
// Summary: The surface a finished chart is handed to for presentation.

use anyhow::Result;

use crate::{Chart, RenderOptions};

/// Presents a chart. Window-backed implementations block until the viewer is closed.
pub trait ChartDisplay {
    fn show(&mut self, chart: &Chart, opts: &RenderOptions) -> Result<()>;
}

impl<D: ChartDisplay + ?Sized> ChartDisplay for Box<D> {
    fn show(&mut self, chart: &Chart, opts: &RenderOptions) -> Result<()> {
        (**self).show(chart, opts)
    }
}
