//! Benchmarks for the statistics engine.

use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stats_engine::{StatSummary, StatisticsEngine};
use vehicle_model::VehicleRecord;

const BRANDS: [&str; 6] = ["Toyota", "BMW", "Lada", "Kia", "Hyundai", "Audi"];

fn inventory(size: usize) -> Vec<VehicleRecord> {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
    (0..size)
        .map(|i| {
            let year = 2005 + (i % 20) as i32;
            let price = 300_000.0 + ((i * 7_919) % 4_000_000) as f64;
            VehicleRecord::new(BRANDS[i % BRANDS.len()], "Model", year, price)
                .with_mileage(((i * 3_571) % 250_000) as f64)
                .with_created_at(start + Duration::days((i % 90) as i64))
        })
        .collect()
}

fn benchmark_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("summary");

    for size in [100usize, 1_000, 10_000].iter() {
        let records = inventory(*size);
        group.bench_with_input(BenchmarkId::new("summary", size), &records, |b, records| {
            b.iter(|| {
                let engine = StatisticsEngine::with_reference_year(black_box(records), 2024).unwrap();
                engine.summary()
            });
        });
    }

    group.finish();
}

fn benchmark_export(c: &mut Criterion) {
    let records = inventory(5_000);
    let engine = StatisticsEngine::with_reference_year(&records, 2024).unwrap();

    c.bench_function("export_5000", |b| b.iter(|| engine.export().unwrap()));
    c.bench_function("correlations_5000", |b| b.iter(|| engine.correlations()));
}

fn benchmark_descriptive(c: &mut Criterion) {
    let values: Vec<f64> = (0..10_000).map(|i| ((i * 7_919) % 100_003) as f64).collect();

    c.bench_function("stat_summary_10000", |b| {
        b.iter(|| StatSummary::compute(black_box(&values)))
    });
}

criterion_group!(benches, benchmark_summary, benchmark_export, benchmark_descriptive);
criterion_main!(benches);
