// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and CPU raster rendering pipeline (Skia) producing an RGBA8 frame.

use anyhow::Result;
use skia_safe as skia;

use crate::geometry::RectI32;
use crate::grid::{format_tick, nice_step, nice_ticks};
use crate::legend::{self, draw_legend};
use crate::scale::LinearScale;
use crate::series::Series;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::ViewState;
use crate::Axis;

const TITLE_SIZE: f32 = 15.0;
const AXIS_LABEL_SIZE: f32 = 13.0;
const TICK_LABEL_SIZE: f32 = 11.0;
const TICK_LEN: f32 = 4.0;
const X_TICKS: usize = 8;
const Y_TICKS: usize = 6;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text (title, axis titles, tick labels, legend labels). Off for pixel-stable tests.
    pub draw_labels: bool,
    /// Per-series point budget before LTTB downsampling; `None` draws every point.
    pub max_points: Option<usize>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
            max_points: Some(4000),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub show_grid: bool,
    pub show_legend: bool,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            show_grid: true,
            show_legend: true,
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axis ranges to the finite data, padding Y by `y_margin` of its span.
    pub fn autoscale_axes(&mut self, y_margin: f64) {
        ViewState::from_chart(self, y_margin).apply_to_chart(self);
    }

    /// Render into an RGBA8 (premultiplied) buffer.
    /// Returns (pixels, width, height, row stride in bytes).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = (opts.width.max(1), opts.height.max(1));
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Premul, None);
        let mut surface = skia::surfaces::raster(&info, None, None)
            .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;

        self.draw(surface.canvas(), w, h, opts);

        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("failed to read back rendered pixels");
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    fn draw(&self, canvas: &skia::Canvas, width: i32, height: i32, opts: &RenderOptions) {
        let theme = &opts.theme;
        let plot = RectI32::plot_area(width, height, &opts.insets);
        let sx = LinearScale::horizontal(&self.x_axis, &plot);
        let sy = LinearScale::vertical(&self.y_axis, &plot);
        let text = opts.draw_labels.then(TextShaper::new);

        canvas.clear(theme.background);
        let mut bg = skia::Paint::default();
        bg.set_color(theme.plot_background);
        canvas.draw_rect(plot_rect(&plot), &bg);

        if self.show_grid {
            draw_grid(canvas, &plot, &self.x_axis, &self.y_axis, &sx, &sy, theme);
        }

        canvas.save();
        canvas.clip_rect(plot_rect(&plot), skia::ClipOp::Intersect, true);
        for s in &self.series {
            match opts.max_points {
                Some(budget) => draw_line_series(canvas, &sx, &sy, &s.downsample_xy_lttb(budget)),
                None => draw_line_series(canvas, &sx, &sy, s),
            }
        }
        canvas.restore();

        draw_axes(canvas, &plot, &self.x_axis, &self.y_axis, &sx, &sy, theme, text.as_ref());

        if let Some(t) = text.as_ref() {
            if !self.title.is_empty() {
                let y = ((plot.top as f32 - TITLE_SIZE * 1.3) * 0.5).max(2.0);
                t.draw_centered(canvas, &self.title, (plot.left + plot.right) as f32 * 0.5, y, TITLE_SIZE, theme.title);
            }
        }

        if self.show_legend {
            draw_legend(canvas, &plot, &self.series, theme, text.as_ref());
        }
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

// ---- helpers ----------------------------------------------------------------

fn plot_rect(plot: &RectI32) -> skia::Rect {
    skia::Rect::from_ltrb(plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32)
}

fn draw_grid(
    canvas: &skia::Canvas,
    plot: &RectI32,
    x: &Axis,
    y: &Axis,
    sx: &LinearScale,
    sy: &LinearScale,
    theme: &Theme,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(0.8);

    let (t, b) = (plot.top as f32, plot.bottom as f32);
    for v in nice_ticks(x.min, x.max, X_TICKS) {
        let px = sx.to_px(v);
        canvas.draw_line((px, t), (px, b), &paint);
    }
    let (l, r) = (plot.left as f32, plot.right as f32);
    for v in nice_ticks(y.min, y.max, Y_TICKS) {
        let py = sy.to_px(v);
        canvas.draw_line((l, py), (r, py), &paint);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_axes(
    canvas: &skia::Canvas,
    plot: &RectI32,
    x: &Axis,
    y: &Axis,
    sx: &LinearScale,
    sy: &LinearScale,
    theme: &Theme,
    text: Option<&TextShaper>,
) {
    let mut frame = skia::Paint::default();
    frame.set_color(theme.axis_line);
    frame.set_anti_alias(true);
    frame.set_style(skia::paint::Style::Stroke);
    frame.set_stroke_width(1.0);
    canvas.draw_rect(plot_rect(plot), &frame);

    let mut tick = skia::Paint::default();
    tick.set_color(theme.tick);
    tick.set_anti_alias(true);
    tick.set_stroke_width(1.0);

    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);

    let x_step = nice_step(x.max - x.min, X_TICKS);
    for v in nice_ticks(x.min, x.max, X_TICKS) {
        let px = sx.to_px(v);
        canvas.draw_line((px, b), (px, b + TICK_LEN), &tick);
        if let Some(txt) = text {
            txt.draw_centered(canvas, &format_tick(v, x_step), px, b + TICK_LEN + 2.0, TICK_LABEL_SIZE, theme.tick);
        }
    }

    let y_step = nice_step(y.max - y.min, Y_TICKS);
    for v in nice_ticks(y.min, y.max, Y_TICKS) {
        let py = sy.to_px(v);
        canvas.draw_line((l - TICK_LEN, py), (l, py), &tick);
        if let Some(txt) = text {
            txt.draw_right(canvas, &format_tick(v, y_step), l - TICK_LEN - 3.0, py, TICK_LABEL_SIZE, theme.tick);
        }
    }

    if let Some(txt) = text {
        txt.draw_centered(canvas, &x.label, (l + r) * 0.5, b + TICK_LEN + TICK_LABEL_SIZE + 12.0, AXIS_LABEL_SIZE, theme.axis_label);
        txt.draw_vertical(canvas, &y.label, AXIS_LABEL_SIZE, (t + b) * 0.5, AXIS_LABEL_SIZE, theme.axis_label);
    }
}

/// Stroke each finite run of the series as one open sub-path.
fn draw_line_series(canvas: &skia::Canvas, sx: &LinearScale, sy: &LinearScale, series: &Series) {
    let mut path = skia::Path::new();
    for run in series.segments() {
        if run.len() < 2 {
            continue;
        }
        let (x0, y0) = run[0];
        path.move_to((sx.to_px(x0), sy.to_px(y0)));
        for &(x, y) in &run[1..] {
            path.line_to((sx.to_px(x), sy.to_px(y)));
        }
    }
    if path.is_empty() {
        return;
    }
    canvas.draw_path(&path, &legend::stroke_paint(series));
}
