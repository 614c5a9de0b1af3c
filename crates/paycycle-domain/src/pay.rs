use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::{Amounted, Recurring};
use crate::frequency::{Frequency, PayFrequency};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// The user's pay: how much, how often, and the most recent payday.
pub struct PaySchedule {
    pub amount: f64,
    pub last_payday: NaiveDate,
    pub frequency: PayFrequency,
}

impl PaySchedule {
    pub fn new(amount: f64, last_payday: NaiveDate, frequency: PayFrequency) -> Self {
        Self {
            amount,
            last_payday,
            frequency,
        }
    }
}

impl Amounted for PaySchedule {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Recurring for PaySchedule {
    fn anchor(&self) -> NaiveDate {
        self.last_payday
    }

    fn frequency(&self) -> Frequency {
        self.frequency.into()
    }

    /// The last payday is always a payday that already happened.
    fn existing_recurring(&self) -> bool {
        true
    }
}
