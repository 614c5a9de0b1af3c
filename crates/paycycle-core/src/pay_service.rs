use paycycle_domain::{Book, PaySchedule};
use tracing::info;

use crate::{
    bill_service::{validate_amount, validate_anchor},
    CoreError,
};

pub struct PayService;

impl PayService {
    /// Replaces the pay schedule wholesale.
    pub fn set(book: &mut Book, schedule: PaySchedule) -> Result<(), CoreError> {
        validate_amount(schedule.amount)?;
        validate_anchor(schedule.last_payday)?;
        info!(
            amount = schedule.amount,
            last_payday = %schedule.last_payday,
            frequency = %schedule.frequency,
            "pay schedule set"
        );
        book.pay_schedule = Some(schedule);
        book.touch();
        Ok(())
    }

    /// Removes the pay schedule, returning the previous one if any.
    pub fn clear(book: &mut Book) -> Option<PaySchedule> {
        let previous = book.pay_schedule.take();
        if previous.is_some() {
            book.touch();
        }
        previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use paycycle_domain::PayFrequency;

    #[test]
    fn set_replaces_and_clear_removes() {
        let mut book = Book::new();
        let payday = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        PayService::set(&mut book, PaySchedule::new(1000.0, payday, PayFrequency::Weekly))
            .expect("set schedule");
        PayService::set(&mut book, PaySchedule::new(2000.0, payday, PayFrequency::Monthly))
            .expect("replace schedule");
        assert_eq!(book.pay_schedule.as_ref().map(|s| s.amount), Some(2000.0));

        let cleared = PayService::clear(&mut book);
        assert_eq!(cleared.map(|s| s.frequency), Some(PayFrequency::Monthly));
        assert!(book.pay_schedule.is_none());
    }

    #[test]
    fn set_rejects_negative_pay() {
        let mut book = Book::new();
        let payday = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert!(PayService::set(&mut book, PaySchedule::new(-5.0, payday, PayFrequency::Weekly))
            .is_err());
        assert!(book.pay_schedule.is_none());

        let ancient = NaiveDate::from_ymd_opt(24, 1, 5).unwrap();
        assert!(PayService::set(&mut book, PaySchedule::new(500.0, ancient, PayFrequency::Weekly))
            .is_err());
        assert!(book.pay_schedule.is_none());
    }
}
