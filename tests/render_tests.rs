use chrono::NaiveDate;
use insta::assert_snapshot;
use paycycle::cli::render::ReportRenderer;
use paycycle::currency::Presentation;
use paycycle_config::{Config, DateStyle};
use paycycle_core::SummaryService;
use paycycle_domain::{Bill, Book, CalendarMonth, Frequency, PayFrequency, PaySchedule};
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn renderer() -> ReportRenderer {
    let config = Config {
        date_style: DateStyle::Short,
        ..Config::default()
    };
    ReportRenderer::new(Presentation::from_config(&config))
}

fn book() -> Book {
    let mut rent = Bill::new("Rent", 1100.0, date(2024, 1, 1), Frequency::Monthly);
    rent.id = Uuid::from_u128(0xbbbb0002_0000_4000_8000_000000000002);
    let mut water = Bill::new("Water", 45.0, date(2024, 6, 20), Frequency::EveryThreeWeeks)
        .with_existing_recurring(true);
    water.id = Uuid::from_u128(0xaaaa0001_0000_4000_8000_000000000001);

    let mut book = Book::new();
    book.bills = vec![rent, water];
    book.pay_schedule = Some(PaySchedule::new(
        2000.0,
        date(2024, 5, 31),
        PayFrequency::Monthly,
    ));
    book
}

#[test]
fn pay_period_report_text() {
    let book = book();
    let report = SummaryService::pay_period(&book, date(2024, 6, 15)).unwrap();
    assert_snapshot!(renderer().pay_period(&report), @r###"
    Pay period 2024-05-31 to 2024-06-29 (next payday 2024-06-30)
    Pay                   $2,000.00
      2024-06-01  Rent    $1,100.00
      2024-06-20  Water      $45.00
    Due                   $1,145.00
    Leftover                $855.00
    "###);
}

#[test]
fn monthly_report_text() {
    let book = book();
    let june = CalendarMonth::new(2024, 6).unwrap();
    let report = SummaryService::month(&book, june).unwrap();
    assert_snapshot!(renderer().month(&report), @r###"
    June 2024
    Income       $2,000.00
    Bills        $1,145.00
    Net            $855.00
    "###);
}

#[test]
fn monthly_report_flags_bill_that_cannot_advance() {
    let mut book = book();
    book.bills = vec![
        Bill::new("Gym", 40.0, date(2024, 6, 5), Frequency::Unrecognized)
            .with_existing_recurring(true),
    ];
    let july = CalendarMonth::new(2024, 7).unwrap();
    let report = SummaryService::month(&book, july).unwrap();
    assert_snapshot!(renderer().month(&report), @r###"
    July 2024
    Income       $2,000.00
    Bills            $0.00
    Net          $2,000.00
    ! schedule cut short: frequency `unrecognized` did not advance past 2024-06-05
    "###);
}

#[test]
fn bill_list_text_orders_by_next_due() {
    let book = book();
    let today = date(2024, 6, 15);
    let due = SummaryService::bills_by_current_occurrence(&book.bills, today);
    assert_snapshot!(renderer().bill_list(today, &due), @r###"
    Bills as of 2024-06-15
      2024-06-20  Water        $45.00  Every 3 weeks (existing)  [aaaa0001]
      2024-07-01  Rent      $1,100.00  Monthly  [bbbb0002]
    "###);
}

#[test]
fn empty_period_says_so() {
    let mut book = book();
    book.bills.clear();
    let report = SummaryService::pay_period(&book, date(2024, 6, 15)).unwrap();
    let text = renderer().pay_period(&report);
    assert!(text.contains("No bills due this period."));
    assert!(text.ends_with("$2,000.00"));
}
