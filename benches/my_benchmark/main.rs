// Available modules
mod parse_tables;

// Used Modules
use criterion::{criterion_group, criterion_main, Criterion};
use parse_tables::*;

fn criterion_benchmark(c: &mut Criterion) {
    bench_parse_averages(c);
    bench_parse_distribution(c);
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
