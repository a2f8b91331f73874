use barchart_core::{index_for, BarChart, Series};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn gen_points(n: usize) -> Vec<f64> {
    (0..n).map(|i| ((i as f64) * 0.1).sin().abs() * 100.0).collect()
}

fn bench_mapper(c: &mut Criterion) {
    c.bench_function("index_for_sweep_1k", |b| {
        b.iter(|| {
            let mut acc = 0usize;
            for k in 0..1000 {
                let f = k as f64 / 1000.0;
                if let Some(i) = index_for(black_box(f), 64) {
                    acc += i;
                }
            }
            black_box(acc)
        })
    });
}

fn bench_frame(c: &mut Criterion) {
    let mut chart = BarChart::new(Series::from_points(gen_points(256)));
    chart.set_available_width(1024.0);
    chart.on_pointer_move(0.5);
    let chart = chart;

    c.bench_function("frame_read_256", |b| {
        b.iter(|| {
            let m = chart.layout_metrics();
            let mut acc = f64::from(m.gap);
            for i in 0..chart.bar_count() {
                acc += chart.normalized_height(i).unwrap();
                acc += f64::from(chart.per_bar_scale(i).x);
            }
            acc += f64::from(chart.label_offset()) + f64::from(chart.arrow_offset());
            black_box(acc)
        })
    });
}

criterion_group!(benches, bench_mapper, bench_frame);
criterion_main!(benches);
