// File: crates/chart-core/src/downsample.rs
// Summary: Largest-Triangle-Three-Buckets downsampling for dense benchmark curves.

/// Reduce `points` to exactly `threshold` points (when it has more), keeping
/// the first and last point and, per bucket, the point spanning the largest
/// triangle with its neighbours.
pub fn lttb(points: &[(f64, f64)], threshold: usize) -> Vec<(f64, f64)> {
    let n = points.len();
    if threshold >= n || n <= 2 { return points.to_vec(); }
    match threshold {
        0 => return Vec::new(),
        1 => return vec![points[0]],
        2 => return vec![points[0], points[n - 1]],
        _ => {}
    }

    // interior points split into `threshold - 2` buckets
    let every = (n - 2) as f64 / (threshold - 2) as f64;
    let bucket = |i: usize| -> (usize, usize) {
        let start = 1 + (i as f64 * every).floor() as usize;
        let end = (1 + ((i + 1) as f64 * every).floor() as usize).min(n - 1);
        (start, end.max(start + 1))
    };

    let mut out = Vec::with_capacity(threshold);
    out.push(points[0]);
    let mut prev = points[0];

    for i in 0..threshold - 2 {
        let (start, end) = bucket(i);

        // centroid of the next bucket, or the final point after the last bucket
        let (cx, cy) = if i + 1 < threshold - 2 {
            let (ns, ne) = bucket(i + 1);
            let slice = &points[ns..ne];
            let k = slice.len() as f64;
            let (sx, sy) = slice.iter().fold((0.0, 0.0), |(ax, ay), &(x, y)| (ax + x, ay + y));
            (sx / k, sy / k)
        } else {
            points[n - 1]
        };

        let mut best = points[start];
        let mut best_area = -1.0f64;
        for &(x, y) in &points[start..end] {
            let area = ((prev.0 - cx) * (y - prev.1) - (prev.0 - x) * (cy - prev.1)).abs();
            if area > best_area {
                best_area = area;
                best = (x, y);
            }
        }
        out.push(best);
        prev = best;
    }

    out.push(points[n - 1]);
    out
}
