use anyhow::Result;
use chart_core::comparison::add_rolling_averages;
use chart_core::{build_comparison_chart, Chart, RenderOptions, Table};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_chart(n: usize) -> Chart {
    let mut csv = String::with_capacity(n * 32);
    csv.push_str("x,vectime,listtime,vecgain\n");
    for i in 1..=n {
        let v = 40.0 * i as f64 + (i as f64 * 0.01).sin() * 200.0;
        let l = 95.0 * i as f64 + (i as f64 * 0.013).cos() * 500.0;
        csv.push_str(&format!("{i},{v},{l},{}\n", l - v));
    }
    let mut table = Table::from_reader(csv.as_bytes()).expect("fixture parses");
    add_rolling_averages(&mut table, 2_000).expect("rolling");
    build_comparison_chart(&table, 2_000).expect("chart")
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_rgba8");
    for &n in &[10_000usize, 50_000usize] {
        let ch = build_chart(n);
        for (name, budget) in [("lttb", Some(4_000usize)), ("full", None)] {
            group.bench_function(format!("rows_{n}_{name}"), |b| {
                let mut opts = RenderOptions::default();
                opts.width = 800;
                opts.height = 500;
                opts.draw_labels = false;
                opts.max_points = budget;
                b.iter(|| -> Result<()> {
                    let frame = ch.render_to_rgba8(&opts)?;
                    black_box(frame);
                    Ok(())
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
