// File: crates/chart-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use chart_core::{Axis, Chart, RenderOptions, Series, StrokePattern};
use chart_core::theme::BLUE;

fn diagonal_chart(pattern: StrokePattern) -> Chart {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    let mut s = Series::line("diag", vec![(0.0, 0.0), (4.0, 4.0)]).with_color(BLUE);
    s.style.width = 6.0;
    s.style.pattern = pattern;
    chart.add_series(s);
    chart
}

fn opts() -> RenderOptions {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    opts
}

#[test]
fn render_rgba8_buffer() {
    let (px, w, h, stride) = diagonal_chart(StrokePattern::Solid).render_to_rgba8(&opts()).expect("rgba render");
    assert_eq!((w, h), (1024, 640));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Opaque white background in the top-left corner (RGBA)
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
}

#[test]
fn line_passes_through_plot_centre() {
    // default insets put the plot at x 84..996, y 48..580; the diagonal crosses its centre
    let (px, _, _, stride) = diagonal_chart(StrokePattern::Solid).render_to_rgba8(&opts()).unwrap();
    let (x, y) = (540usize, 314usize);
    let p = &px[y * stride + x * 4..y * stride + x * 4 + 4];
    assert!(p[2] > 200 && p[0] < 60 && p[1] < 60, "expected blue, got {p:?}");
}

#[test]
fn dashed_stroke_differs_from_solid() {
    let (solid, ..) = diagonal_chart(StrokePattern::Solid).render_to_rgba8(&opts()).unwrap();
    let (dashed, ..) = diagonal_chart(StrokePattern::Dashed).render_to_rgba8(&opts()).unwrap();
    assert_ne!(solid, dashed);
}

#[test]
fn gaps_do_not_fail_rendering() {
    let mut chart = Chart::new();
    chart.add_series(Series::line("gappy", vec![(0.0, 1.0), (f64::NAN, f64::NAN), (2.0, 3.0), (3.0, 2.0)]));
    chart.autoscale_axes(0.05);
    let mut o = opts();
    o.width = 200;
    o.height = 120;
    let (px, w, h, _) = chart.render_to_rgba8(&o).unwrap();
    assert_eq!(px.len(), (w * h * 4) as usize);
}
