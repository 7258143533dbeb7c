// File: crates/chart-core/src/series.rs
// Summary: Labelled line series with stroke style. Non-finite points mark gaps.

use skia_safe as skia;

use crate::theme;

/// On/off lengths in pixels for dashed strokes.
pub const DASH_INTERVALS: [f32; 2] = [7.4, 3.2];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrokePattern {
    Solid,
    Dashed,
}

#[derive(Clone, Copy, Debug)]
pub struct LineStyle {
    pub color: skia::Color,
    pub width: f32,
    pub pattern: StrokePattern,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self { color: theme::BLUE, width: 1.5, pattern: StrokePattern::Solid }
    }
}

#[derive(Clone, Debug)]
pub struct Series {
    pub label: String,
    pub data_xy: Vec<(f64, f64)>,
    pub style: LineStyle,
}

impl Series {
    pub fn line(label: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { label: label.into(), data_xy: data, style: LineStyle::default() }
    }

    /// Pair two row-aligned columns. A row missing either coordinate, or holding
    /// an infinite one, becomes a NaN point, which the renderer draws as a break.
    pub fn from_columns(label: impl Into<String>, x: &[Option<f64>], y: &[Option<f64>]) -> Self {
        let data = x
            .iter()
            .zip(y)
            .map(|(&x, &y)| match (x, y) {
                (Some(x), Some(y)) if x.is_finite() && y.is_finite() => (x, y),
                _ => (f64::NAN, f64::NAN),
            })
            .collect();
        Self::line(label, data)
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.style.color = color;
        self
    }

    pub fn dashed(mut self) -> Self {
        self.style.pattern = StrokePattern::Dashed;
        self
    }

    pub fn finite_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.data_xy.iter().copied().filter(|(x, y)| x.is_finite() && y.is_finite())
    }

    /// Maximal runs of consecutive finite points.
    pub fn segments(&self) -> Vec<&[(f64, f64)]> {
        self.data_xy
            .split(|(x, y)| !(x.is_finite() && y.is_finite()))
            .filter(|run| !run.is_empty())
            .collect()
    }

    /// Downsample each finite run with LTTB so the whole series keeps at most
    /// about `max_points` points. Gaps are preserved.
    pub fn downsample_xy_lttb(&self, max_points: usize) -> Self {
        use crate::downsample::lttb;
        let total = self.finite_points().count();
        if max_points < 2 || total <= max_points {
            return self.clone();
        }
        let mut data = Vec::with_capacity(max_points + 16);
        for (i, run) in self.segments().into_iter().enumerate() {
            if i > 0 {
                data.push((f64::NAN, f64::NAN));
            }
            let share = ((run.len() as f64 / total as f64) * max_points as f64).ceil() as usize;
            data.extend(lttb(run, share.max(2)));
        }
        Series { label: self.label.clone(), data_xy: data, style: self.style }
    }
}
