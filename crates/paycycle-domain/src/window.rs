use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::{add_months, is_within_interval};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
/// Half-open date range `[start, end)`.
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateWindowError> {
        if end <= start {
            return Err(DateWindowError::InvalidRange);
        }
        Ok(Self { start, end })
    }

    /// Last date still inside the window (`end - 1 day`).
    pub fn last_day(&self) -> NaiveDate {
        self.end.pred_opt().unwrap_or(self.start)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        is_within_interval(date, self.start, self.last_day())
    }

    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .. {}", self.start, self.last_day())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Errors that can occur when constructing [`DateWindow`] or [`CalendarMonth`] values.
pub enum DateWindowError {
    InvalidRange,
    InvalidMonth { year: i32, month: u32 },
}

impl fmt::Display for DateWindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateWindowError::InvalidRange => f.write_str("date window end must be after start"),
            DateWindowError::InvalidMonth { year, month } => {
                write!(f, "invalid calendar month {year}-{month:02}")
            }
        }
    }
}

impl std::error::Error for DateWindowError {}

/// A calendar month, stored as its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarMonth {
    first_day: NaiveDate,
}

impl CalendarMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, DateWindowError> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first_day| Self { first_day })
            .ok_or(DateWindowError::InvalidMonth { year, month })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first_day: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    pub fn next(&self) -> Self {
        Self {
            first_day: add_months(self.first_day, 1),
        }
    }

    pub fn window(&self) -> DateWindow {
        DateWindow {
            start: self.first_day,
            end: add_months(self.first_day, 1),
        }
    }

    pub fn label(&self) -> String {
        self.first_day.format("%B %Y").to_string()
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for CalendarMonth {
    type Err = DateWindowError;

    /// Parses `YYYY-MM`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = DateWindowError::InvalidMonth { year: 0, month: 0 };
        let (year, month) = value.trim().split_once('-').ok_or(invalid)?;
        let year = year.parse::<i32>().map_err(|_| invalid)?;
        let month = month.parse::<u32>().map_err(|_| invalid)?;
        Self::new(year, month)
    }
}
