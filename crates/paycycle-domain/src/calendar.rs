//! Date-only calendar arithmetic.
//!
//! Every value here is a [`NaiveDate`]; there is no time-of-day and no time
//! zone. Windows elsewhere in the workspace are half-open `[start, end)` and are
//! tested by pairing [`is_within_interval`] (inclusive on both ends) with an
//! `end - 1 day` upper bound.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

/// Moves `date` by `weeks` whole weeks (negative values move backward).
///
/// Returns `date` unchanged when the result would leave chrono's supported
/// range, which the walkers treat as a stalled step.
pub fn add_weeks(date: NaiveDate, weeks: i64) -> NaiveDate {
    Duration::try_weeks(weeks)
        .and_then(|delta| date.checked_add_signed(delta))
        .unwrap_or(date)
}

/// Moves `date` by `months` calendar months, keeping the day of month when the
/// target month has it and clamping to the target month's last day otherwise.
///
/// `2024-01-31 + 1 month` is `2024-02-29`, never a rollover into March.
pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let index = month_index(date) + months;
    let year = index.div_euclid(12);
    let month = index.rem_euclid(12) as u32 + 1;
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(date)
}

/// Strips the time-of-day from a local timestamp.
pub fn start_of_day(moment: NaiveDateTime) -> NaiveDate {
    moment.date()
}

/// Inclusive containment check: `start <= date <= end`.
pub fn is_within_interval(date: NaiveDate, start: NaiveDate, end: NaiveDate) -> bool {
    date >= start && date <= end
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_next| first_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}

/// Number of calendar months from `from`'s month to `to`'s month, ignoring days.
pub fn month_span(from: NaiveDate, to: NaiveDate) -> i32 {
    month_index(to) - month_index(from)
}

fn month_index(date: NaiveDate) -> i32 {
    date.year() * 12 + date.month0() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn add_months_clamps_to_short_months() {
        assert_eq!(add_months(date(2024, 1, 31), 1), date(2024, 2, 29));
        assert_eq!(add_months(date(2023, 1, 31), 1), date(2023, 2, 28));
        assert_eq!(add_months(date(2024, 3, 31), 1), date(2024, 4, 30));
        assert_eq!(add_months(date(2024, 1, 31), 2), date(2024, 3, 31));
    }

    #[test]
    fn add_months_crosses_year_boundaries_both_ways() {
        assert_eq!(add_months(date(2024, 11, 15), 3), date(2025, 2, 15));
        assert_eq!(add_months(date(2024, 2, 15), -3), date(2023, 11, 15));
        assert_eq!(add_months(date(2024, 3, 31), -1), date(2024, 2, 29));
    }

    #[test]
    fn add_weeks_moves_whole_weeks() {
        assert_eq!(add_weeks(date(2024, 1, 5), 2), date(2024, 1, 19));
        assert_eq!(add_weeks(date(2024, 1, 5), -1), date(2023, 12, 29));
    }

    #[test]
    fn add_weeks_out_of_range_is_a_no_op() {
        assert_eq!(add_weeks(NaiveDate::MAX, 1), NaiveDate::MAX);
    }

    #[test]
    fn interval_check_is_inclusive() {
        let start = date(2024, 6, 1);
        let end = date(2024, 6, 30);
        assert!(is_within_interval(start, start, end));
        assert!(is_within_interval(end, start, end));
        assert!(!is_within_interval(date(2024, 7, 1), start, end));
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2100, 2), 28);
        assert_eq!(days_in_month(2024, 12), 31);
    }

    #[test]
    fn start_of_day_drops_time() {
        let moment = date(2024, 6, 10).and_hms_opt(23, 59, 59).unwrap();
        assert_eq!(start_of_day(moment), date(2024, 6, 10));
    }

    #[test]
    fn month_span_ignores_days() {
        assert_eq!(month_span(date(2024, 1, 31), date(2024, 3, 1)), 2);
        assert_eq!(month_span(date(2024, 3, 1), date(2023, 12, 31)), -3);
    }
}
