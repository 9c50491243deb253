//! Criterion benchmarks for the stick pipeline.
//! Focus sizes: n in {4, 16, 64, 256} boundary sticks.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use sticks::prelude::*;

fn closed_set(n: usize, seed: u64) -> (StickSet, String) {
    let cfg = StickGenCfg {
        vertex_count: VertexCount::Fixed(n),
        angle_jitter_frac: 0.1,
        radial_jitter: 0.0,
        base_radius: 1.0e6,
        ..StickGenCfg::default()
    };
    let drawn = draw_closed_sticks(cfg, ReplayToken { seed, index: 0 }).expect("draw");
    let mut text = format!("{}\n", drawn.sticks.len());
    for s in &drawn.sticks {
        text.push_str(&format!("{} {} {} {}\n", s.a.x, s.a.y, s.b.x, s.b.y));
    }
    (drawn.sticks.into_iter().collect(), text)
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    for &n in &[4usize, 16, 64, 256] {
        group.bench_with_input(BenchmarkId::new("analyze", n), &n, |b, &n| {
            let (set, _) = closed_set(n, 41);
            b.iter(|| analyze(&set))
        });
        group.bench_with_input(BenchmarkId::new("parse_and_analyze", n), &n, |b, &n| {
            let (_, text) = closed_set(n, 42);
            b.iter(|| analyze_text(&text).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("order_by_angle", n), &n, |b, &n| {
            b.iter_batched(
                || closed_set(n, 43).0.tally().points(),
                OrderedPolygon::from_points,
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
