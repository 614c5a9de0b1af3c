use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{Amounted, Identifiable, NamedEntity, Recurring};
use crate::frequency::Frequency;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// A bill the user pays once or on a repeating schedule.
pub struct Bill {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    /// Anchor date every occurrence is derived from.
    pub due_date: NaiveDate,
    pub frequency: Frequency,
    /// Bills stored before this flag existed were already-running series.
    #[serde(default = "Bill::legacy_existing_recurring")]
    pub existing_recurring: bool,
}

impl Bill {
    /// Creates a new bill whose due date is its first occurrence.
    pub fn new(
        name: impl Into<String>,
        amount: f64,
        due_date: NaiveDate,
        frequency: Frequency,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            due_date,
            frequency,
            existing_recurring: false,
        }
    }

    pub fn with_existing_recurring(mut self, existing_recurring: bool) -> Self {
        self.existing_recurring = existing_recurring;
        self
    }

    fn legacy_existing_recurring() -> bool {
        true
    }
}

impl Identifiable for Bill {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Bill {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Amounted for Bill {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Recurring for Bill {
    fn anchor(&self) -> NaiveDate {
        self.due_date
    }

    fn frequency(&self) -> Frequency {
        self.frequency
    }

    fn existing_recurring(&self) -> bool {
        self.frequency.is_recurring() && self.existing_recurring
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_bills_start_as_fresh_series() {
        let due = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let bill = Bill::new("Rent", 1200.0, due, Frequency::Monthly);
        assert!(!bill.existing_recurring);
        assert!(Recurring::existing_recurring(
            &bill.clone().with_existing_recurring(true)
        ));
    }

    #[test]
    fn one_time_bills_ignore_the_flag() {
        let due = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let bill = Bill::new("Repair", 50.0, due, Frequency::OneTime).with_existing_recurring(true);
        assert!(!Recurring::existing_recurring(&bill));
    }

    #[test]
    fn legacy_records_default_to_existing_recurring() {
        let json = r#"{
            "id": "6f1c5d2e-8a4b-4c1d-9e2f-0a1b2c3d4e5f",
            "name": "Internet",
            "amount": 60.0,
            "due_date": "2023-11-05",
            "frequency": "monthly"
        }"#;
        let bill: Bill = serde_json::from_str(json).unwrap();
        assert!(bill.existing_recurring);
        assert_eq!(bill.frequency, Frequency::Monthly);
    }
}
