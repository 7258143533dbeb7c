// File: crates/chart-core/src/grid.rs
// Summary: Grid/tick layout helpers.

/// Step of the form {1, 2, 2.5, 5} × 10^k giving roughly `target` intervals over `span`.
pub fn nice_step(span: f64, target: usize) -> f64 {
    if !span.is_finite() || span <= 0.0 { return 1.0; }
    let raw = span / target.max(1) as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 2.5 {
        2.5
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Tick positions at multiples of a nice step, all within `[min, max]`.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !(min.is_finite() && max.is_finite()) || max <= min { return vec![min]; }
    let step = nice_step(max - min, target);
    let first = (min / step).ceil();
    let last = (max / step).floor();
    let mut out = Vec::new();
    let mut k = first;
    while k <= last {
        let v = k * step;
        // snap -0.0 and float dust like 0.30000000000000004
        out.push(if v.abs() < step * 1e-9 { 0.0 } else { v });
        k += 1.0;
    }
    out
}

/// Label for a tick: plain integers for whole values, otherwise just enough decimals for `step`.
pub fn format_tick(v: f64, step: f64) -> String {
    let abs = v.abs();
    if abs >= 1e7 || (abs > 0.0 && abs < 1e-4) {
        return format!("{v:.1e}");
    }
    let decimals = (0..6usize)
        .find(|&d| {
            let scaled = step * 10f64.powi(d as i32);
            (scaled - scaled.round()).abs() < 1e-6
        })
        .unwrap_or(6);
    format!("{v:.decimals$}")
}
