// File: crates/chart-core/src/legend.rs
// Summary: Legend box in the upper-left corner of the plot: stroke swatch + series label per row.

use skia_safe as skia;

use crate::geometry::RectI32;
use crate::series::{Series, StrokePattern, DASH_INTERVALS};
use crate::text::TextShaper;
use crate::theme::Theme;

pub const FONT_SIZE: f32 = 12.0;
const ROW_HEIGHT: f32 = 18.0;
const SWATCH_LEN: f32 = 28.0;
const PAD: f32 = 8.0;
const GAP: f32 = 6.0;
const OFFSET: f32 = 10.0;

/// Legend bounds for `series` anchored inside `plot`. Without a shaper the
/// box only holds swatches.
pub fn legend_rect(plot: &RectI32, series: &[Series], text: Option<&TextShaper>) -> skia::Rect {
    let label_w = text
        .map(|t| {
            series
                .iter()
                .map(|s| t.measure_width(&s.label, FONT_SIZE))
                .fold(0.0f32, f32::max)
        })
        .map(|w| GAP + w)
        .unwrap_or(0.0);
    let w = PAD * 2.0 + SWATCH_LEN + label_w;
    let h = PAD * 2.0 + ROW_HEIGHT * series.len() as f32;
    let left = plot.left as f32 + OFFSET;
    let top = plot.top as f32 + OFFSET;
    skia::Rect::from_xywh(left, top, w, h)
}

pub fn draw_legend(
    canvas: &skia::Canvas,
    plot: &RectI32,
    series: &[Series],
    theme: &Theme,
    text: Option<&TextShaper>,
) {
    if series.is_empty() {
        return;
    }
    let rect = legend_rect(plot, series, text);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_color(theme.legend_background);
    canvas.draw_round_rect(rect, 3.0, 3.0, &fill);

    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(1.0);
    border.set_color(theme.legend_border);
    canvas.draw_round_rect(rect, 3.0, 3.0, &border);

    for (i, s) in series.iter().enumerate() {
        let cy = rect.top + PAD + ROW_HEIGHT * (i as f32 + 0.5);
        let x0 = rect.left + PAD;
        let stroke = stroke_paint(s);
        canvas.draw_line((x0, cy), (x0 + SWATCH_LEN, cy), &stroke);

        if let Some(t) = text {
            t.draw_left(canvas, &s.label, x0 + SWATCH_LEN + GAP, cy - ROW_HEIGHT * 0.5 + 1.0, FONT_SIZE, theme.axis_label);
        }
    }
}

/// Stroke paint for a series line, dashed when the style asks for it.
pub(crate) fn stroke_paint(s: &Series) -> skia::Paint {
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(s.style.width);
    stroke.set_stroke_cap(skia::paint::Cap::Butt);
    stroke.set_stroke_join(skia::paint::Join::Round);
    stroke.set_color(s.style.color);
    if s.style.pattern == StrokePattern::Dashed {
        stroke.set_path_effect(skia::PathEffect::dash(&DASH_INTERVALS, 0.0));
    }
    stroke
}
