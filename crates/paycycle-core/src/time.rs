use chrono::{DateTime, Local, NaiveDate};
use paycycle_domain::calendar::start_of_day;

/// Clock abstracts access to "today" so the engine stays deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the current local timestamp.
    fn now(&self) -> DateTime<Local>;

    /// Returns the current local calendar date.
    fn today(&self) -> NaiveDate {
        start_of_day(self.now().naive_local())
    }
}

/// A clock pinned to one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    today: NaiveDate,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.today
            .and_hms_opt(12, 0, 0)
            .and_then(|noon| noon.and_local_timezone(Local).earliest())
            .unwrap_or_else(Local::now)
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}
