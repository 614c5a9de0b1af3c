//! Shared traits for entities the schedule engine can walk.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::frequency::Frequency;

/// Exposes a stable identifier for stored entities.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Provides read-only access to an entity's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Supplies a common contract for retrieving numeric amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Anything that produces dated occurrences from an anchor and a frequency.
pub trait Recurring {
    fn anchor(&self) -> NaiveDate;

    fn frequency(&self) -> Frequency;

    /// Whether the anchor is a past occurrence of an established series rather
    /// than the first occurrence of a new one.
    fn existing_recurring(&self) -> bool;
}
