//! Sweeps bills (or the pay schedule) through a half-open date window.

use chrono::NaiveDate;
use paycycle_domain::{Amounted, Bill, CalendarMonth, DateWindow, PaySchedule, Recurring};
use tracing::{debug, warn};

use crate::resolver::{resolve_occurrence, WalkDiagnostic, MAX_WALK_STEPS};

/// One dated instance of a bill or payday. Derived, never stored.
#[derive(Debug, Clone)]
pub struct Occurrence<'a, T> {
    pub date: NaiveDate,
    pub amount: f64,
    pub source: &'a T,
}

/// Every occurrence inside a window, sorted by date, plus the total.
#[derive(Debug, Clone)]
pub struct WindowTotals<'a, T> {
    pub window: DateWindow,
    pub total: f64,
    pub occurrences: Vec<Occurrence<'a, T>>,
    /// Loop-guard trips hit while sweeping; affected entries were cut short.
    pub diagnostics: Vec<WalkDiagnostic>,
}

impl<T> WindowTotals<'_, T> {
    pub fn len(&self) -> usize {
        self.occurrences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }
}

/// Enumerates every occurrence of `items` inside `window` and sums their amounts.
///
/// Each entry is resolved against `window.start` and then stepped forward
/// until it reaches `window.end`. One-time entries are tested once. The result
/// is sorted ascending by date; entries falling on the same date keep their
/// input order.
pub fn occurrences_in_window<T>(items: &[T], window: DateWindow) -> WindowTotals<'_, T>
where
    T: Recurring + Amounted,
{
    let mut occurrences = Vec::new();
    let mut diagnostics = Vec::new();

    for item in items {
        let anchor = item.anchor();
        let frequency = item.frequency();
        let amount = item.amount();

        if frequency.is_one_time() {
            if window.contains(anchor) {
                occurrences.push(Occurrence {
                    date: anchor,
                    amount,
                    source: item,
                });
            }
            continue;
        }

        let resolution =
            resolve_occurrence(anchor, frequency, item.existing_recurring(), window.start);
        if let Some(diagnostic) = resolution.diagnostic {
            diagnostics.push(diagnostic);
            if window.contains(resolution.date) {
                occurrences.push(Occurrence {
                    date: resolution.date,
                    amount,
                    source: item,
                });
            }
            continue;
        }

        let mut index = resolution.index;
        let mut candidate = resolution.date;
        let mut steps = 0;
        while candidate < window.end {
            if window.contains(candidate) {
                occurrences.push(Occurrence {
                    date: candidate,
                    amount,
                    source: item,
                });
            }
            if steps >= MAX_WALK_STEPS {
                let diagnostic = WalkDiagnostic::StepLimit { steps };
                warn!(%diagnostic, "window sweep aborted");
                diagnostics.push(diagnostic);
                break;
            }
            let next = frequency.nth(anchor, index + 1);
            if next <= candidate {
                let diagnostic = WalkDiagnostic::Stalled {
                    at: candidate,
                    frequency,
                };
                warn!(%diagnostic, "window sweep aborted");
                diagnostics.push(diagnostic);
                break;
            }
            index += 1;
            candidate = next;
            steps += 1;
        }
    }

    occurrences.sort_by_key(|occurrence| occurrence.date);
    let total = occurrences
        .iter()
        .fold(0.0, |acc, occurrence| acc + occurrence.amount);
    debug!(
        start = %window.start,
        end = %window.end,
        count = occurrences.len(),
        total,
        "aggregated window"
    );

    WindowTotals {
        window,
        total,
        occurrences,
        diagnostics,
    }
}

/// Every bill occurrence falling in `month`, with any guard trips.
pub fn monthly_bill_totals(bills: &[Bill], month: CalendarMonth) -> WindowTotals<'_, Bill> {
    occurrences_in_window(bills, month.window())
}

/// Every payday inside `month`, with any guard trips.
pub fn monthly_income_totals(
    schedule: &PaySchedule,
    month: CalendarMonth,
) -> WindowTotals<'_, PaySchedule> {
    occurrences_in_window(std::slice::from_ref(schedule), month.window())
}

/// Sum of every bill occurrence falling in `month`.
pub fn monthly_bill_total(bills: &[Bill], month: CalendarMonth) -> f64 {
    monthly_bill_totals(bills, month).total
}

/// Pay received in `month`: one pay amount per payday inside the month.
pub fn monthly_income(schedule: &PaySchedule, month: CalendarMonth) -> f64 {
    monthly_income_totals(schedule, month).total
}
