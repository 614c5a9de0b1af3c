//! The persisted aggregate: every bill plus the optional pay schedule.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{de::Deserializer, Deserialize, Serialize};
use uuid::Uuid;

use crate::bill::Bill;
use crate::frequency::PayFrequency;
use crate::pay::PaySchedule;

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    #[serde(default = "Book::schema_version_default")]
    pub schema_version: u32,
    #[serde(default)]
    pub bills: Vec<Bill>,
    /// `None` when the user has not configured pay yet, or when the stored
    /// schedule is missing a field the engine needs.
    #[serde(default, deserialize_with = "deserialize_pay_schedule")]
    pub pay_schedule: Option<PaySchedule>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Default for Book {
    fn default() -> Self {
        Self::new()
    }
}

impl Book {
    pub fn new() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            bills: Vec::new(),
            pay_schedule: None,
            updated_at: Utc::now(),
        }
    }

    fn schema_version_default() -> u32 {
        CURRENT_SCHEMA_VERSION
    }

    pub fn bill(&self, id: Uuid) -> Option<&Bill> {
        self.bills.iter().find(|bill| bill.id == id)
    }

    pub fn bill_mut(&mut self, id: Uuid) -> Option<&mut Bill> {
        self.bills.iter_mut().find(|bill| bill.id == id)
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[derive(Deserialize)]
struct StoredPaySchedule {
    amount: Option<f64>,
    last_payday: Option<NaiveDate>,
    frequency: Option<PayFrequency>,
}

fn deserialize_pay_schedule<'de, D>(deserializer: D) -> Result<Option<PaySchedule>, D::Error>
where
    D: Deserializer<'de>,
{
    let stored = Option::<StoredPaySchedule>::deserialize(deserializer)?;
    Ok(stored.and_then(|raw| {
        Some(PaySchedule {
            amount: raw.amount?,
            last_payday: raw.last_payday?,
            frequency: raw.frequency?,
        })
    }))
}
