// Available modules
mod pipeline;

// Used Modules
use criterion::{criterion_group, criterion_main, Criterion};
use pipeline::*;

fn criterion_benchmark(c: &mut Criterion) {
    bench_parse_records(c);
    bench_classify_and_extract(c);
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
