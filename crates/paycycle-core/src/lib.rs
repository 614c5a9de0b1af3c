//! paycycle-core
//!
//! The recurrence resolution engine and the services built on it.
//! Depends on paycycle-domain. No CLI, no terminal I/O, no direct storage interactions.
//!
//! Every engine entry point is a pure function of its inputs: the caller
//! supplies the reference date (see [`Clock`]) and nothing is cached between calls.

pub mod aggregator;
pub mod bill_service;
pub mod error;
pub mod locator;
pub mod pay_service;
pub mod report;
pub mod resolver;
pub mod storage;
pub mod summary_service;
pub mod time;

pub use aggregator::{
    monthly_bill_total, monthly_bill_totals, monthly_income, monthly_income_totals,
    occurrences_in_window, Occurrence, WindowTotals,
};
pub use bill_service::BillService;
pub use error::CoreError;
pub use locator::locate_pay_period;
pub use pay_service::PayService;
pub use report::{DueBill, MonthlyReport, PayPeriodReport};
pub use resolver::{
    resolve_current_occurrence, resolve_occurrence, Resolution, WalkDiagnostic, MAX_WALK_STEPS,
};
pub use storage::{BookBackupInfo, BookStorage};
pub use summary_service::SummaryService;
pub use time::{Clock, FixedClock};
