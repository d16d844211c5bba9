use criterion::{black_box, Criterion};
use matmul_perf_plots::analysis::{classify_records, extract_series};
use matmul_perf_plots::common::schema::FIXED_SCHEMA;
use matmul_perf_plots::parsing::parse_records;

/// Builds a results file shaped like the harness output, `sizes` rows per label.
fn synthetic_results(sizes: usize) -> String {
    let mut text = String::from("trial,method,size,time\n");
    for size in 0..sizes {
        for spec in FIXED_SCHEMA.series {
            let time = size * size * size / 50 + 10;
            text.push_str(&format!("{},{},{},{}\n", size, spec.label, size + 10, time));
        }
    }
    text
}

pub fn bench_parse_records(c: &mut Criterion) {
    for &sizes in &[100, 1000] {
        let text = synthetic_results(sizes);
        let id = &format!("parse_records_{}", sizes);
        c.bench_function(id, |b| b.iter(|| parse_records(black_box(&text))));
    }
}

pub fn bench_classify_and_extract(c: &mut Criterion) {
    for &sizes in &[100, 1000] {
        let records = parse_records(&synthetic_results(sizes));
        let id = &format!("classify_and_extract_{}", sizes);
        c.bench_function(id, |b| {
            b.iter(|| {
                let buckets =
                    classify_records(black_box(records.clone()), &FIXED_SCHEMA).unwrap();
                extract_series(&buckets).unwrap()
            })
        });
    }
}
