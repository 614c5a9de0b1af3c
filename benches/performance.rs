use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use paycycle_core::{locate_pay_period, occurrences_in_window, BookStorage, SummaryService};
use paycycle_domain::{Bill, Book, CalendarMonth, DateWindow, Frequency, PayFrequency, PaySchedule};
use paycycle_storage_json::JsonBookStorage;
use tempfile::tempdir;

fn build_sample_book(bill_count: usize) -> Book {
    let start = NaiveDate::from_ymd_opt(2015, 1, 1).unwrap();
    let mut book = Book::new();
    for idx in 0..bill_count {
        let frequency = Frequency::ALL[idx % Frequency::ALL.len()];
        let anchor = start + Duration::days((idx * 37 % 3650) as i64);
        let bill = Bill::new(format!("Bill {idx}"), 10.0 + (idx % 90) as f64, anchor, frequency)
            .with_existing_recurring(idx % 2 == 0);
        book.bills.push(bill);
    }
    book.pay_schedule = Some(PaySchedule::new(
        2500.0,
        NaiveDate::from_ymd_opt(2015, 1, 2).unwrap(),
        PayFrequency::BiWeekly,
    ));
    book
}

fn bench_engine(c: &mut Criterion) {
    let book = build_sample_book(black_box(1_000));
    let reference = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    let year = DateWindow::new(
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
    )
    .unwrap();

    c.bench_function("occurrences_in_window_1k_bills_year", |b| {
        b.iter(|| black_box(occurrences_in_window(&book.bills, year).total))
    });

    c.bench_function("pay_period_report_1k_bills", |b| {
        b.iter(|| black_box(SummaryService::pay_period(&book, reference).map(|r| r.leftover)))
    });

    c.bench_function("monthly_report_1k_bills", |b| {
        let month = CalendarMonth::containing(reference);
        b.iter(|| black_box(SummaryService::month(&book, month)))
    });

    let schedule = PaySchedule::new(
        1000.0,
        NaiveDate::from_ymd_opt(1950, 1, 31).unwrap(),
        PayFrequency::Monthly,
    );
    c.bench_function("locate_pay_period_distant_anchor", |b| {
        b.iter(|| black_box(locate_pay_period(&schedule, reference)))
    });
}

fn bench_book_io(c: &mut Criterion) {
    let book = build_sample_book(black_box(1_000));
    let dir = tempdir().expect("tempdir");
    let storage = JsonBookStorage::new(dir.path()).expect("storage");

    c.bench_function("book_save_1k", |b| {
        b.iter_batched(
            || book.clone(),
            |book| storage.save_book(&book).expect("save book"),
            BatchSize::SmallInput,
        )
    });

    c.bench_function("book_load_1k", |b| {
        b.iter(|| black_box(storage.load_book().expect("load book")))
    });
}

criterion_group!(benches, bench_engine, bench_book_io);
criterion_main!(benches);
