use chart_core::rolling_mean;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};

fn gen_timings(n: usize) -> Vec<Option<f64>> {
    (0..n)
        .map(|i| {
            // linear growth with jitter, one gap per 10k rows
            if i % 10_000 == 9_999 { None } else { Some(40.0 * i as f64 + (i as f64 * 0.7).sin() * 300.0) }
        })
        .collect()
}

fn bench_rolling(c: &mut Criterion) {
    let mut group = c.benchmark_group("rolling_mean");
    for &n in &[50_000usize, 200_000usize] {
        let data = gen_timings(n);
        for &window in &[100usize, 2_000usize] {
            group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}_w{window}")), &window, |b, &w| {
                b.iter(|| black_box(rolling_mean(black_box(&data), w)));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_rolling);
criterion_main!(benches);
