//! Performance benchmarks for the Vacation Tracking Engine.
//!
//! Covers the paths a large paste exercises:
//! - Parsing CSV and block input
//! - Adding a parsed batch to a store with existing records
//! - Building a month calendar
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use vacation_tracker::calculation::{MonthCalendar, Report, ReportFilter};
use vacation_tracker::models::VacationRecord;
use vacation_tracker::parsing::parse_input;
use vacation_tracker::store::{MemoryRepository, VacationStore};

const TYPES: [&str; 3] = ["عادية", "مرضية", "تعويضية"];

/// Builds `count` CSV lines spread over 2024, one employee per line.
fn csv_input(count: usize) -> String {
    (0..count)
        .map(|i| {
            let month = i % 12 + 1;
            let day = i % 20 + 1;
            format!(
                "{},{},Employee {},1445/01/01,{:02}/{:02}/2024,1445/01/05,{:02}/{:02}/2024",
                TYPES[i % TYPES.len()],
                1000 + i,
                i,
                month,
                day,
                month,
                day + 4
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Same records as [`csv_input`] in the seven-line block layout.
fn block_input(count: usize) -> String {
    csv_input(count).replace(',', "\n")
}

fn records(count: usize) -> Vec<VacationRecord> {
    parse_input(&csv_input(count)).data
}

fn bench_parse_csv(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_csv");
    for count in [10, 100, 1000] {
        let input = csv_input(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &input, |b, input| {
            b.iter(|| parse_input(black_box(input)))
        });
    }
    group.finish();
}

fn bench_parse_block(c: &mut Criterion) {
    let input = block_input(100);
    c.bench_function("parse_block_100", |b| {
        b.iter(|| parse_input(black_box(&input)))
    });
}

fn bench_add_vacations(c: &mut Criterion) {
    let existing = records(1000);
    let batch = parse_input(&csv_input(1100)).data;

    c.bench_function("add_100_to_1000_existing", |b| {
        b.iter_batched(
            || {
                let repo = MemoryRepository::with_records(existing.clone());
                (VacationStore::open(repo).unwrap(), batch.clone())
            },
            |(mut store, batch)| store.add_vacations(batch).unwrap(),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_views(c: &mut Criterion) {
    let records = records(1000);

    c.bench_function("month_calendar_1000", |b| {
        b.iter(|| MonthCalendar::build(black_box(&records), 2024, 6).unwrap())
    });

    c.bench_function("year_report_1000", |b| {
        b.iter(|| Report::build(black_box(&records), &ReportFilter::for_year(2024)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_parse_csv,
    bench_parse_block,
    bench_add_vacations,
    bench_views
);
criterion_main!(benches);
