//! Repeat cadences for bills and pay schedules, plus the occurrence advancer.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{de::Deserializer, Deserialize, Serialize, Serializer};

use crate::calendar::{add_months, add_weeks, month_span};

/// How often a bill repeats.
///
/// `Unrecognized` is what an unknown stored label decodes to. It advances by
/// nothing, so any walk over it trips the strict-advance guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    OneTime,
    Weekly,
    BiWeekly,
    EveryThreeWeeks,
    Monthly,
    Unrecognized,
}

enum Cadence {
    Once,
    Weeks(i64),
    Months(i32),
    Stuck,
}

impl Frequency {
    /// Every frequency a user can pick.
    pub const ALL: [Frequency; 5] = [
        Frequency::OneTime,
        Frequency::Weekly,
        Frequency::BiWeekly,
        Frequency::EveryThreeWeeks,
        Frequency::Monthly,
    ];

    fn cadence(self) -> Cadence {
        match self {
            Frequency::OneTime => Cadence::Once,
            Frequency::Weekly => Cadence::Weeks(1),
            Frequency::BiWeekly => Cadence::Weeks(2),
            Frequency::EveryThreeWeeks => Cadence::Weeks(3),
            Frequency::Monthly => Cadence::Months(1),
            Frequency::Unrecognized => Cadence::Stuck,
        }
    }

    pub fn is_one_time(self) -> bool {
        matches!(self, Frequency::OneTime)
    }

    pub fn is_recurring(self) -> bool {
        matches!(
            self,
            Frequency::Weekly
                | Frequency::BiWeekly
                | Frequency::EveryThreeWeeks
                | Frequency::Monthly
        )
    }

    /// Occurrence `index` of a schedule anchored at `anchor` (index 0 is the anchor).
    ///
    /// Monthly occurrences are computed from the anchor rather than chained, so
    /// a bill anchored on the 31st lands on the 31st whenever the month has one.
    pub fn nth(self, anchor: NaiveDate, index: i32) -> NaiveDate {
        match self.cadence() {
            Cadence::Once | Cadence::Stuck => anchor,
            Cadence::Weeks(weeks) => add_weeks(anchor, weeks * index as i64),
            Cadence::Months(months) => add_months(anchor, months * index),
        }
    }

    /// Whole cycles from `anchor` to `reference`, rounded toward the past.
    /// Exact for week cadences, at most one off for monthly ones.
    /// One-time and unrecognized frequencies have no cycles.
    pub fn cycles_between(self, anchor: NaiveDate, reference: NaiveDate) -> i32 {
        match self.cadence() {
            Cadence::Once | Cadence::Stuck => 0,
            Cadence::Weeks(weeks) => {
                let days = (reference - anchor).num_days();
                i32::try_from(days.div_euclid(weeks * 7)).unwrap_or(0)
            }
            Cadence::Months(months) => month_span(anchor, reference).div_euclid(months),
        }
    }

    /// One step forward. One-time and unrecognized frequencies return `date`.
    pub fn next(self, date: NaiveDate) -> NaiveDate {
        self.nth(date, 1)
    }

    /// One step backward; the inverse of [`Frequency::next`].
    pub fn previous(self, date: NaiveDate) -> NaiveDate {
        self.nth(date, -1)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Frequency::OneTime => "one-time",
            Frequency::Weekly => "weekly",
            Frequency::BiWeekly => "bi-weekly",
            Frequency::EveryThreeWeeks => "every-3-weeks",
            Frequency::Monthly => "monthly",
            Frequency::Unrecognized => "unrecognized",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Frequency::OneTime => "One-time",
            Frequency::Weekly => "Weekly",
            Frequency::BiWeekly => "Bi-weekly",
            Frequency::EveryThreeWeeks => "Every 3 weeks",
            Frequency::Monthly => "Monthly",
            Frequency::Unrecognized => "Unrecognized",
        }
    }

    /// Lenient decoding used for stored data: unknown labels become `Unrecognized`.
    pub fn from_label(value: &str) -> Self {
        value.parse().unwrap_or(Frequency::Unrecognized)
    }
}

impl FromStr for Frequency {
    type Err = ParseFrequencyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "one-time" | "onetime" | "once" => Ok(Frequency::OneTime),
            "weekly" => Ok(Frequency::Weekly),
            "bi-weekly" | "biweekly" | "fortnightly" => Ok(Frequency::BiWeekly),
            "every-3-weeks" | "every-three-weeks" | "triweekly" => Ok(Frequency::EveryThreeWeeks),
            "monthly" => Ok(Frequency::Monthly),
            "unrecognized" => Ok(Frequency::Unrecognized),
            _ => Err(ParseFrequencyError(value.trim().to_string())),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Frequency {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Frequency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Frequency::from_label(&value))
    }
}

/// Cadences a pay schedule may use.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum PayFrequency {
    Weekly,
    BiWeekly,
    Monthly,
}

impl PayFrequency {
    pub const ALL: [PayFrequency; 3] = [
        PayFrequency::Weekly,
        PayFrequency::BiWeekly,
        PayFrequency::Monthly,
    ];

    /// Length in weeks, or `None` for the calendar-month cadence.
    pub fn weeks(self) -> Option<i64> {
        match self {
            PayFrequency::Weekly => Some(1),
            PayFrequency::BiWeekly => Some(2),
            PayFrequency::Monthly => None,
        }
    }
}

impl From<PayFrequency> for Frequency {
    fn from(value: PayFrequency) -> Self {
        match value {
            PayFrequency::Weekly => Frequency::Weekly,
            PayFrequency::BiWeekly => Frequency::BiWeekly,
            PayFrequency::Monthly => Frequency::Monthly,
        }
    }
}

impl FromStr for PayFrequency {
    type Err = ParseFrequencyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.parse::<Frequency>()? {
            Frequency::Weekly => Ok(PayFrequency::Weekly),
            Frequency::BiWeekly => Ok(PayFrequency::BiWeekly),
            Frequency::Monthly => Ok(PayFrequency::Monthly),
            _ => Err(ParseFrequencyError(value.trim().to_string())),
        }
    }
}

impl fmt::Display for PayFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Frequency::from(*self).fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Raised when user input names no known frequency.
pub struct ParseFrequencyError(pub String);

impl fmt::Display for ParseFrequencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown frequency `{}`", self.0)
    }
}

impl std::error::Error for ParseFrequencyError {}
