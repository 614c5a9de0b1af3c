use chrono::NaiveDate;
use paycycle::currency::{format_date, format_number, NumberStyle, Presentation};
use paycycle_config::{Config, DateStyle};

fn presentation(currency: &str, locale: &str) -> Presentation {
    let mut config = Config::default();
    config.set_value("currency", currency).unwrap();
    config.set_value("locale", locale).unwrap();
    Presentation::from_config(&config)
}

#[test]
fn formats_currency_with_locale() {
    assert_eq!(presentation("USD", "en-US").money(1234.5), "$1,234.50");
    assert_eq!(presentation("EUR", "de-DE").money(1234.5), "1.234,50 €");
    assert_eq!(presentation("EUR", "fr-FR").money(-1234.5), "-1 234,50 €");
    assert_eq!(presentation("CAD", "en-CA").money(5.0), "CAD 5.00");
}

#[test]
fn minor_units_follow_currency_unless_overridden() {
    assert_eq!(presentation("JPY", "ja-JP").money(1234.4), "¥1,234");

    let mut config = Config::default();
    config.set_value("precision", "0").unwrap();
    assert_eq!(Presentation::from_config(&config).money(99.99), "$100");
}

#[test]
fn negative_amounts_that_round_to_zero_lose_the_sign() {
    assert_eq!(presentation("USD", "en-US").money(-0.001), "$0.00");
    assert_eq!(presentation("USD", "en-US").money(-12.0), "-$12.00");
}

#[test]
fn groups_large_numbers() {
    assert_eq!(
        format_number(NumberStyle::default(), 1_234_567.891, 2),
        "1,234,567.89"
    );
    assert_eq!(format_number(NumberStyle::default(), 999.0, 0), "999");
}

#[test]
fn formats_dates_by_style() {
    let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
    assert_eq!(format_date(DateStyle::Short, date), "2024-06-10");
    assert_eq!(format_date(DateStyle::Medium, date), "Mon 10 Jun 2024");
}
