use chrono::{DateTime, Local};

use paycycle_core::Clock;

/// Real-time clock; "today" is the local calendar date.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
