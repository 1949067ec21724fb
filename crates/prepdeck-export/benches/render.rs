use criterion::{black_box, criterion_group, criterion_main, Criterion};

use prepdeck_export::write_pdf;

fn bench_write_pdf(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bench.pdf");
    let summary = "Jane Doe\nSenior Data Engineer\nPython, SQL, Spark, Airflow\nAWS, GCP\nLeadership";

    let mut group = c.benchmark_group("write_pdf");

    let short: Vec<String> = (1..=5).map(|i| format!("Question {i}?")).collect();
    group.bench_function("5_questions", |b| {
        b.iter(|| write_pdf(black_box(&short), "Data Scientist", summary, &path).unwrap())
    });

    let long: Vec<String> = (1..=100).map(|i| format!("Question {i}?")).collect();
    group.bench_function("100_questions", |b| {
        b.iter(|| write_pdf(black_box(&long), "Data Scientist", summary, &path).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_write_pdf);
criterion_main!(benches);
