use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use bmstat::aggregate::{Aggregator, collect_benchmark_statistics};
use bmstat::display;
use bmstat::parse;
use bmstat::types::{AveragingMode, BenchmarkResult};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Synthetic Google Benchmark console output with `cases` result rows.
fn make_output(cases: usize) -> String {
    let mut out = String::from(concat!(
        "Running ./bench\n",
        "Run on (8 X 2400 MHz CPU s)\n",
        "---------------------------------------------------------------\n",
        "Benchmark                     Time             CPU   Iterations\n",
        "---------------------------------------------------------------\n",
    ));
    for i in 0..cases {
        out.push_str(&format!(
            "BM_Case/{:<20} {:>10} ns {:>12} ns {:>12}\n",
            i,
            1000 + i * 7,
            990 + i * 7,
            10_000 + i
        ));
    }
    out
}

fn make_results(cases: usize) -> Vec<BenchmarkResult> {
    (0..cases)
        .map(|i| BenchmarkResult::new(format!("BM_Case/{}", i), 1000.0 + i as f64, 990.0, 10_000.0))
        .collect()
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_parse_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_output");
    for &cases in &[10, 100, 1000] {
        let output = make_output(cases);
        group.bench_with_input(BenchmarkId::from_parameter(cases), &output, |b, output| {
            b.iter(|| parse::parse_output(output).unwrap());
        });
    }
    group.finish();
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");
    let runs = make_results(100);
    for mode in [AveragingMode::Mean, AveragingMode::Progressive] {
        group.bench_with_input(
            BenchmarkId::new(format!("{:?}", mode), 50),
            &runs,
            |b, runs| {
                b.iter(|| {
                    let mut agg = Aggregator::new(mode);
                    for _ in 0..50 {
                        agg.push_run(runs.clone()).unwrap();
                    }
                    agg.finish()
                });
            },
        );
    }
    group.finish();
}

fn bench_collect(c: &mut Criterion) {
    let output = make_output(100);
    c.bench_function("collect_benchmark_statistics/10x100", |b| {
        b.iter(|| {
            collect_benchmark_statistics(10, AveragingMode::Mean, |_| Ok(output.clone())).unwrap()
        });
    });
}

fn bench_format_report(c: &mut Criterion) {
    let results = make_results(100);
    c.bench_function("format_report/100", |b| {
        b.iter(|| display::format_report(&results));
    });
}

criterion_group!(
    benches,
    bench_parse_output,
    bench_aggregate,
    bench_collect,
    bench_format_report
);
criterion_main!(benches);
