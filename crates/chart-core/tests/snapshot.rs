// File: crates/chart-core/tests/snapshot.rs
// Purpose: Golden snapshot of the comparison chart with bless flow.
// Behavior:
// - Renders a deterministic comparison chart (no text) to RGBA.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot PNG.
// - Else, if the snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and skips the pixel comparison.
// - In every mode, the three curve colors must each show up in the plot.

use chart_core::comparison::add_rolling_averages;
use chart_core::{build_comparison_chart, RenderOptions, Table};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn render_image() -> image::RgbaImage {
    let mut csv = String::from("x,vectime,listtime,vecgain\n");
    for i in 1..=400u32 {
        let vec_t = 30.0 * i as f64 + ((i * 37) % 23) as f64 * 40.0;
        let list_t = 70.0 * i as f64 + ((i * 53) % 29) as f64 * 90.0;
        csv.push_str(&format!("{i},{vec_t},{list_t},{}\n", list_t - vec_t));
    }
    let mut table = Table::from_reader(csv.as_bytes()).expect("parse fixture");
    add_rolling_averages(&mut table, 50).expect("rolling");
    let chart = build_comparison_chart(&table, 50).expect("chart");

    let mut opts = RenderOptions::default();
    opts.width = 640;
    opts.height = 400;
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    let (px, w, h, _) = chart.render_to_rgba8(&opts).expect("render rgba");
    image::RgbaImage::from_raw(w, h, px).expect("buffer matches dimensions")
}

/// Pixels per curve hue, ignoring the legend corner (swatches only when text is off).
fn hue_counts(img: &image::RgbaImage) -> (usize, usize, usize) {
    let (mut blue, mut orange, mut green) = (0, 0, 0);
    for (x, y, px) in img.enumerate_pixels() {
        if x <= 150 && y <= 170 {
            continue;
        }
        let [r, g, b, _] = px.0.map(i32::from);
        if b - r.max(g) > 100 {
            blue += 1;
        } else if r - b > 100 && r >= g && g > 60 {
            orange += 1;
        } else if g - r.max(b) > 50 {
            green += 1;
        }
    }
    (blue, orange, green)
}

#[test]
fn every_curve_color_reaches_the_plot() {
    let (blue, orange, green) = hue_counts(&render_image());
    assert!(blue > 50, "vector curves barely drawn: {blue} blue pixels");
    assert!(orange > 50, "list curves barely drawn: {orange} orange pixels");
    assert!(green > 50, "speedup curves barely drawn: {green} green pixels");
}

#[test]
fn golden_comparison_chart() {
    let got = render_image();
    let (blue, orange, green) = hue_counts(&got);
    assert!(blue > 50 && orange > 50 && green > 50, "curves missing: {blue}/{orange}/{green}");
    let snap_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/comparison.png");

    if bless_mode() {
        if let Some(parent) = snap_path.parent() { std::fs::create_dir_all(parent).expect("create snapshots dir"); }
        got.save(&snap_path).expect("write snapshot");
        eprintln!("[snapshot] Updated {}", snap_path.display());
        return;
    }

    if snap_path.exists() {
        let want = image::open(&snap_path).expect("decode snapshot").to_rgba8();
        assert_eq!(got.dimensions(), want.dimensions());
        assert_eq!(got.as_raw(), want.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}
