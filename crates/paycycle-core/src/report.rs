//! Report shapes handed back to the presentation layer.

use chrono::NaiveDate;
use paycycle_domain::{Bill, CalendarMonth, DateWindow};

use crate::aggregator::WindowTotals;
use crate::resolver::WalkDiagnostic;

/// A bill paired with its current occurrence as of some reference date.
#[derive(Debug, Clone)]
pub struct DueBill<'a> {
    pub bill: &'a Bill,
    pub current: NaiveDate,
    pub diagnostic: Option<WalkDiagnostic>,
}

/// What the current pay cycle looks like: pay in, bills out, what is left.
#[derive(Debug, Clone)]
pub struct PayPeriodReport<'a> {
    pub reference: NaiveDate,
    pub window: DateWindow,
    pub pay_amount: f64,
    pub due: WindowTotals<'a, Bill>,
    pub leftover: f64,
}

impl PayPeriodReport<'_> {
    pub fn total_due(&self) -> f64 {
        self.due.total
    }

    /// Paydays are the window bounds; the next one is the window end.
    pub fn next_payday(&self) -> NaiveDate {
        self.window.end
    }
}

/// Estimated income and expenses for one calendar month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyReport {
    pub month: CalendarMonth,
    pub income: f64,
    pub expenses: f64,
    pub net: f64,
    /// Guard trips from either sweep; the totals above are cut short.
    pub diagnostics: Vec<WalkDiagnostic>,
}
