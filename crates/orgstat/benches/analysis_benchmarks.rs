//! Pipeline performance benchmarks.
//!
//! Measures cleaning throughput and aggregation cost separately, plus the
//! end-to-end pipeline over a file.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::io::Write;
use tempfile::NamedTempFile;

use orgstat::{aggregate, clean, Analyzer};

/// Generate a realistic organisation CSV.
fn generate_organisation_data(rows: usize) -> String {
    let countries = ["norway", "chile", "peru", "fiji", "ghana", "laos"];
    let categories = ["retail", "mining", "shipping", "software", "farming"];

    let mut data = String::new();
    data.push_str("organisation id,name,website,country,founded,category,number of employees,median salary,profits in 2020(million),profits in 2021(million)\n");

    for row in 0..rows {
        data.push_str(&format!(
            "org{row:06x},company {row},http://example{row}.org,{},{},{},{},{},{},{}\n",
            countries[row % countries.len()],
            1950 + (row % 70),
            categories[row % categories.len()],
            1 + (row * 37) % 5000,
            20_000 + (row * 991) % 150_000,
            1 + (row * 13) % 900,
            1 + (row * 29) % 900,
        ));
    }

    data
}

fn bench_clean(c: &mut Criterion) {
    let mut group = c.benchmark_group("clean");

    for &rows in &[100usize, 1_000, 10_000] {
        let data = generate_organisation_data(rows);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &data, |b, data| {
            b.iter(|| clean(black_box(data)).unwrap());
        });
    }

    group.finish();
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for &rows in &[100usize, 1_000, 10_000] {
        let records = clean(&generate_organisation_data(rows)).unwrap();
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &records, |b, records| {
            b.iter(|| aggregate(black_box(records)));
        });
    }

    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let data = generate_organisation_data(5_000);
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(data.as_bytes()).unwrap();

    let analyzer = Analyzer::new();
    c.bench_function("process_5k_rows", |b| {
        b.iter(|| analyzer.process(black_box(file.path())).unwrap());
    });
}

criterion_group!(benches, bench_clean, bench_aggregate, bench_full_pipeline);
criterion_main!(benches);
