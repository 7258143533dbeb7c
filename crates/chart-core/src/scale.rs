// File: crates/chart-core/src/scale.rs
// Summary: Linear data-to-pixel transforms for the X and Y axes.

use crate::axis::Axis;
use crate::geometry::RectI32;

/// Maps axis values onto a pixel interval. Y grows downward on screen, so the
/// vertical scale is built with `start_px` at the bottom edge.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub start_px: f32,
    pub end_px: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl LinearScale {
    pub fn new(start_px: f32, end_px: f32, vmin: f64, vmax: f64) -> Self {
        let vmax = if (vmax - vmin).abs() < 1e-12 { vmin + 1.0 } else { vmax };
        Self { start_px, end_px, vmin, vmax }
    }

    pub fn horizontal(axis: &Axis, plot: &RectI32) -> Self {
        Self::new(plot.left as f32, plot.right as f32, axis.min, axis.max)
    }

    pub fn vertical(axis: &Axis, plot: &RectI32) -> Self {
        Self::new(plot.bottom as f32, plot.top as f32, axis.min, axis.max)
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = (v - self.vmin) / (self.vmax - self.vmin);
        self.start_px + t as f32 * (self.end_px - self.start_px)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let t = (px - self.start_px) / (self.end_px - self.start_px);
        self.vmin + t as f64 * (self.vmax - self.vmin)
    }
}
