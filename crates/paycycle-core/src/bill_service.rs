//! Bill CRUD with boundary validation. The engine only ever sees bills that
//! passed through here.

use chrono::NaiveDate;
use paycycle_domain::{Bill, Book, Frequency};
use tracing::info;
use uuid::Uuid;

use crate::{resolver::guard_floor, CoreError};

pub struct BillService;

impl BillService {
    /// Validates and stores a new bill, returning its identifier.
    pub fn add(book: &mut Book, bill: Bill) -> Result<Uuid, CoreError> {
        validate(&bill)?;
        if book.bill(bill.id).is_some() {
            return Err(CoreError::Validation(format!(
                "a bill with id {} already exists",
                bill.id
            )));
        }
        let id = bill.id;
        info!(%id, name = %bill.name, "bill added");
        book.bills.push(bill);
        book.touch();
        Ok(id)
    }

    /// Applies `mutate` to a copy of the bill and stores it if it still validates.
    /// The identifier cannot be changed.
    pub fn update<F>(book: &mut Book, id: Uuid, mutate: F) -> Result<(), CoreError>
    where
        F: FnOnce(&mut Bill),
    {
        let stored = book.bill_mut(id).ok_or(CoreError::BillNotFound(id))?;
        let mut edited = stored.clone();
        mutate(&mut edited);
        edited.id = id;
        validate(&edited)?;
        *stored = edited;
        book.touch();
        Ok(())
    }

    pub fn remove(book: &mut Book, id: Uuid) -> Result<Bill, CoreError> {
        let position = book
            .bills
            .iter()
            .position(|bill| bill.id == id)
            .ok_or(CoreError::BillNotFound(id))?;
        let removed = book.bills.remove(position);
        info!(%id, name = %removed.name, "bill removed");
        book.touch();
        Ok(removed)
    }

    /// Looks a bill up by full id, unique id prefix, or case-insensitive name.
    pub fn find<'a>(book: &'a Book, query: &str) -> Result<&'a Bill, CoreError> {
        let needle = query.trim();
        if let Ok(id) = Uuid::parse_str(needle) {
            return book.bill(id).ok_or(CoreError::BillNotFound(id));
        }

        let by_name: Vec<&Bill> = book
            .bills
            .iter()
            .filter(|bill| bill.name.eq_ignore_ascii_case(needle))
            .collect();
        if by_name.len() == 1 {
            return Ok(by_name[0]);
        }

        let prefix = needle.to_ascii_lowercase();
        let by_prefix: Vec<&Bill> = book
            .bills
            .iter()
            .filter(|bill| {
                !prefix.is_empty() && bill.id.simple().to_string().starts_with(&prefix)
            })
            .collect();
        match (by_name.len(), by_prefix.len()) {
            (0, 1) => Ok(by_prefix[0]),
            (0, 0) => Err(CoreError::NoMatch(needle.to_string())),
            _ => Err(CoreError::AmbiguousMatch(needle.to_string())),
        }
    }
}

pub(crate) fn validate(bill: &Bill) -> Result<(), CoreError> {
    if bill.name.trim().is_empty() {
        return Err(CoreError::Validation("bill name cannot be empty".into()));
    }
    validate_amount(bill.amount)?;
    validate_anchor(bill.due_date)?;
    if bill.frequency == Frequency::Unrecognized {
        return Err(CoreError::Validation(format!(
            "bill `{}` has an unrecognized frequency",
            bill.name
        )));
    }
    Ok(())
}

pub(crate) fn validate_anchor(date: NaiveDate) -> Result<(), CoreError> {
    let floor = guard_floor();
    if date < floor {
        return Err(CoreError::Validation(format!("date {date} is before {floor}")));
    }
    Ok(())
}

pub(crate) fn validate_amount(amount: f64) -> Result<(), CoreError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(CoreError::Validation(format!(
            "amount must be a positive number (got {amount})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn due() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn add_rejects_non_positive_amounts() {
        let mut book = Book::new();
        let err = BillService::add(&mut book, Bill::new("Rent", 0.0, due(), Frequency::Monthly))
            .expect_err("zero amount should fail");
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(BillService::add(&mut book, Bill::new("Rent", f64::NAN, due(), Frequency::Monthly))
            .is_err());
        assert!(book.bills.is_empty());
    }

    #[test]
    fn add_rejects_dates_before_the_guard_floor() {
        let mut book = Book::new();
        let ancient = NaiveDate::from_ymd_opt(24, 1, 1).unwrap();
        let err = BillService::add(&mut book, Bill::new("Rent", 900.0, ancient, Frequency::Monthly))
            .expect_err("year 24 should fail");
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(book.bills.is_empty());
    }

    #[test]
    fn add_rejects_blank_names() {
        let mut book = Book::new();
        assert!(BillService::add(&mut book, Bill::new("  ", 5.0, due(), Frequency::Weekly)).is_err());
    }

    #[test]
    fn update_keeps_the_identifier() {
        let mut book = Book::new();
        let id = BillService::add(&mut book, Bill::new("Rent", 900.0, due(), Frequency::Monthly))
            .expect("add bill");
        BillService::update(&mut book, id, |bill| {
            bill.id = Uuid::new_v4();
            bill.amount = 950.0;
            bill.existing_recurring = true;
        })
        .expect("update bill");
        let stored = book.bill(id).expect("bill still addressable");
        assert_eq!(stored.amount, 950.0);
        assert!(stored.existing_recurring);
    }

    #[test]
    fn invalid_update_leaves_bill_untouched() {
        let mut book = Book::new();
        let id = BillService::add(&mut book, Bill::new("Rent", 900.0, due(), Frequency::Monthly))
            .expect("add bill");
        assert!(BillService::update(&mut book, id, |bill| bill.amount = -1.0).is_err());
        assert_eq!(book.bill(id).map(|bill| bill.amount), Some(900.0));
    }

    #[test]
    fn find_matches_names_and_id_prefixes() {
        let mut book = Book::new();
        let rent = BillService::add(&mut book, Bill::new("Rent", 900.0, due(), Frequency::Monthly))
            .expect("add rent");
        BillService::add(&mut book, Bill::new("Phone", 40.0, due(), Frequency::Monthly))
            .expect("add phone");

        assert_eq!(BillService::find(&book, "rent").map(|b| b.id).ok(), Some(rent));
        let prefix: String = rent.simple().to_string().chars().take(12).collect();
        assert_eq!(BillService::find(&book, &prefix).map(|b| b.id).ok(), Some(rent));
        assert!(matches!(
            BillService::find(&book, "water"),
            Err(CoreError::NoMatch(_))
        ));
    }

    #[test]
    fn remove_reports_missing_bills() {
        let mut book = Book::new();
        let missing = Uuid::new_v4();
        assert!(matches!(
            BillService::remove(&mut book, missing),
            Err(CoreError::BillNotFound(id)) if id == missing
        ));
    }
}
