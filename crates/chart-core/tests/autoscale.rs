// File: crates/chart-core/tests/autoscale.rs
// Purpose: Validate autoscale over several series, ignoring gaps.

use chart_core::{Chart, Series, ViewState};

#[test]
fn autoscale_spans_all_series() {
    let mut chart = Chart::new();
    chart.add_series(Series::line("a", vec![(0.0, 1.0), (5.0, 3.0)]));
    chart.add_series(Series::line("b", vec![(2.0, 6.0), (3.0, 1.5)]));

    chart.autoscale_axes(0.0);

    assert_eq!(chart.x_axis.min, 0.0);
    assert_eq!(chart.x_axis.max, 5.0);
    assert_eq!(chart.y_axis.min, 1.0);
    assert_eq!(chart.y_axis.max, 6.0);
}

#[test]
fn autoscale_skips_nan_gaps_and_pads_y() {
    let mut chart = Chart::new();
    chart.add_series(Series::line("a", vec![(f64::NAN, f64::NAN), (1.0, 0.0), (3.0, 10.0)]));
    chart.autoscale_axes(0.1);

    assert_eq!(chart.x_axis.min, 1.0);
    assert_eq!(chart.x_axis.max, 3.0);
    assert!((chart.y_axis.min + 1.0).abs() < 1e-9);
    assert!((chart.y_axis.max - 11.0).abs() < 1e-9);
}

#[test]
fn empty_or_flat_data_has_usable_ranges() {
    let empty = Chart::new();
    let v = ViewState::from_chart(&empty, 0.05);
    assert_eq!((v.x_min, v.x_max, v.y_min, v.y_max), (0.0, 1.0, 0.0, 1.0));

    let mut flat = Chart::new();
    flat.add_series(Series::line("one", vec![(2.0, 7.0)]));
    let v = ViewState::from_chart(&flat, 0.0);
    assert_eq!((v.x_min, v.x_max, v.y_min, v.y_max), (2.0, 3.0, 7.0, 8.0));
}
