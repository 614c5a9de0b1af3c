//! Assembles the reports the application shows: due bills, the current pay
//! period's leftover money, and the monthly income/expense estimate.

use chrono::NaiveDate;
use paycycle_domain::{Bill, Book, CalendarMonth, Recurring};

use crate::{
    aggregator::{monthly_bill_totals, monthly_income_totals, occurrences_in_window},
    locator::locate_pay_period,
    report::{DueBill, MonthlyReport, PayPeriodReport},
    resolver::resolve_occurrence,
};

pub struct SummaryService;

impl SummaryService {
    /// Every bill with its current occurrence, soonest first. Bills resolving
    /// to the same date keep their stored order.
    pub fn bills_by_current_occurrence(bills: &[Bill], today: NaiveDate) -> Vec<DueBill<'_>> {
        let mut due: Vec<DueBill<'_>> = bills
            .iter()
            .map(|bill| {
                let resolution = resolve_occurrence(
                    bill.anchor(),
                    bill.frequency(),
                    bill.existing_recurring(),
                    today,
                );
                DueBill {
                    bill,
                    current: resolution.date,
                    diagnostic: resolution.diagnostic,
                }
            })
            .collect();
        due.sort_by_key(|entry| entry.current);
        due
    }

    /// Leftover money for the pay period containing `today`.
    ///
    /// Returns `None` when no pay schedule is configured.
    pub fn pay_period(book: &Book, today: NaiveDate) -> Option<PayPeriodReport<'_>> {
        let schedule = book.pay_schedule.as_ref()?;
        let window = locate_pay_period(schedule, today);
        let due = occurrences_in_window(&book.bills, window);
        let leftover = schedule.amount - due.total;
        Some(PayPeriodReport {
            reference: today,
            window,
            pay_amount: schedule.amount,
            due,
            leftover,
        })
    }

    /// Income and bill totals for `month`. Returns `None` without a pay schedule.
    pub fn month(book: &Book, month: CalendarMonth) -> Option<MonthlyReport> {
        let schedule = book.pay_schedule.as_ref()?;
        let income = monthly_income_totals(schedule, month);
        let expenses = monthly_bill_totals(&book.bills, month);
        let mut diagnostics = income.diagnostics;
        diagnostics.extend(expenses.diagnostics);
        Some(MonthlyReport {
            month,
            income: income.total,
            expenses: expenses.total,
            net: income.total - expenses.total,
            diagnostics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::WalkDiagnostic;
    use paycycle_domain::{Frequency, PayFrequency, PaySchedule};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_book() -> Book {
        let mut book = Book::new();
        book.pay_schedule = Some(PaySchedule::new(
            1000.0,
            date(2024, 1, 5),
            PayFrequency::BiWeekly,
        ));
        book.bills = vec![
            Bill::new("Rent", 600.0, date(2024, 1, 25), Frequency::Monthly),
            Bill::new("Streaming", 15.0, date(2024, 1, 10), Frequency::Monthly),
            Bill::new("Car repair", 200.0, date(2024, 2, 8), Frequency::OneTime),
        ];
        book
    }

    #[test]
    fn pay_period_report_subtracts_bills_due_in_window() {
        let book = sample_book();
        let report = SummaryService::pay_period(&book, date(2024, 2, 1)).unwrap();
        assert_eq!(report.window.start, date(2024, 1, 19));
        assert_eq!(report.next_payday(), date(2024, 2, 2));
        // Only rent (01-25) falls in [01-19, 02-02).
        assert_eq!(report.due.len(), 1);
        assert_eq!(report.total_due(), 600.0);
        assert_eq!(report.leftover, 400.0);
    }

    #[test]
    fn reports_are_absent_without_pay_schedule() {
        let mut book = sample_book();
        book.pay_schedule = None;
        assert!(SummaryService::pay_period(&book, date(2024, 2, 1)).is_none());
        assert!(SummaryService::month(&book, CalendarMonth::new(2024, 2).unwrap()).is_none());
    }

    #[test]
    fn monthly_report_nets_income_and_expenses() {
        let book = sample_book();
        let report = SummaryService::month(&book, CalendarMonth::new(2024, 2).unwrap()).unwrap();
        // Paydays 02-02 and 02-16.
        assert_eq!(report.income, 2000.0);
        assert_eq!(report.expenses, 815.0);
        assert_eq!(report.net, 1185.0);
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn monthly_report_carries_stalled_bill_diagnostic() {
        let json = r#"{
            "bills": [{
                "id": "00000000-0000-0000-0000-000000000001",
                "name": "Gym",
                "amount": 40.0,
                "due_date": "2024-06-05",
                "frequency": "quarterly"
            }],
            "pay_schedule": {
                "amount": 1000.0,
                "last_payday": "2024-06-01",
                "frequency": "monthly"
            }
        }"#;
        let book: Book = serde_json::from_str(json).unwrap();
        let report = SummaryService::month(&book, CalendarMonth::new(2024, 7).unwrap()).unwrap();
        assert_eq!(report.income, 1000.0);
        assert_eq!(report.expenses, 0.0);
        assert!(report.expenses.is_sign_positive());
        assert!(matches!(
            report.diagnostics.as_slice(),
            [WalkDiagnostic::Stalled {
                frequency: Frequency::Unrecognized,
                ..
            }]
        ));
    }

    #[test]
    fn bills_sort_by_their_current_occurrence() {
        let book = sample_book();
        let due = SummaryService::bills_by_current_occurrence(&book.bills, date(2024, 2, 1));
        let order: Vec<_> = due.iter().map(|entry| entry.bill.name.as_str()).collect();
        assert_eq!(order, vec!["Car repair", "Streaming", "Rent"]);
        assert_eq!(due[1].current, date(2024, 2, 10));
        assert_eq!(due[2].current, date(2024, 2, 25));
    }
}
