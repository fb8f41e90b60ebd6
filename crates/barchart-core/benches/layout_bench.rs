// File: crates/barchart-core/benches/layout_bench.rs
// Purpose: Benchmark layout calculation across data sizes.

use barchart_core::{ChartConfig, ChartLayout, DataItem, ItemId};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::Map;

fn gen_items(n: usize) -> Vec<DataItem> {
    (0..n)
        .map(|i| DataItem {
            name: format!("category-{i}"),
            value: ((i as f64) * 0.37).sin().abs() * 100.0,
            id: ItemId::Index(i as u64),
            color: None,
            extra: Map::new(),
        })
        .collect()
}

fn bench_calculate(c: &mut Criterion) {
    let config = ChartConfig::default();
    let mut group = c.benchmark_group("layout_calculate");
    for &n in &[10usize, 100, 1_000, 10_000] {
        let data = gen_items(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &data, |b, data| {
            let mut layout = ChartLayout::new();
            b.iter(|| {
                let result = layout.calculate(black_box(data), black_box(&config));
                black_box(result.bars.len())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_calculate);
criterion_main!(benches);
