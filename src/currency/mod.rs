//! Money and date rendering driven by the user's [`Config`].

use chrono::{Datelike, NaiveDate};
use paycycle_config::{Config, DateStyle};

/// Separators used when rendering numbers for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberStyle {
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for NumberStyle {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

impl NumberStyle {
    /// Picks separators from a BCP-47-ish tag such as `en-US` or `de_DE`.
    pub fn for_locale(tag: &str) -> Self {
        let language = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match language.as_str() {
            "de" | "es" | "it" | "nl" | "pt" | "da" | "id" | "tr" => Self {
                decimal_separator: ',',
                grouping_separator: '.',
            },
            "fr" | "sv" | "nb" | "fi" | "pl" | "cs" | "ru" | "uk" => Self {
                decimal_separator: ',',
                grouping_separator: ' ',
            },
            _ => Self::default(),
        }
    }
}

/// Everything needed to print amounts and dates consistently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    pub currency: String,
    pub precision: u8,
    pub numbers: NumberStyle,
    pub date_style: DateStyle,
}

impl Default for Presentation {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Presentation {
    pub fn from_config(config: &Config) -> Self {
        let currency = config.currency.trim().to_ascii_uppercase();
        Self {
            precision: config
                .currency_precision
                .unwrap_or_else(|| minor_units_for(&currency)),
            currency,
            numbers: NumberStyle::for_locale(&config.locale),
            date_style: config.date_style,
        }
    }

    /// `$1,234.50`, `-$12.00`, `1.234,50 €` style rendering.
    pub fn money(&self, amount: f64) -> String {
        let body = format_number(self.numbers, amount.abs(), self.precision);
        let symbol = symbol_for(&self.currency);
        let sign = if amount < 0.0 && body.chars().any(|c| c.is_ascii_digit() && c != '0') {
            "-"
        } else {
            ""
        };
        if symbol_trails(&self.currency) {
            format!("{sign}{body} {symbol}")
        } else if symbol.chars().count() > 1 && symbol.chars().all(|c| c.is_ascii_uppercase()) {
            format!("{sign}{symbol} {body}")
        } else {
            format!("{sign}{symbol}{body}")
        }
    }

    pub fn date(&self, date: NaiveDate) -> String {
        format_date(self.date_style, date)
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "AUD" => "A$".into(),
        "BRL" => "R$".into(),
        "INR" => "₹".into(),
        _ => code.into(),
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" | "KRW" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

fn symbol_trails(code: &str) -> bool {
    matches!(code, "EUR")
}

pub fn format_number(style: NumberStyle, value: f64, precision: u8) -> String {
    let fixed = format!("{:.*}", precision as usize, value);
    let (int_part, fraction) = match fixed.split_once('.') {
        Some((int_part, fraction)) => (int_part, Some(fraction)),
        None => (fixed.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };
    let mut out = String::from(sign);
    out.push_str(&group_digits(digits, style.grouping_separator));
    if let Some(fraction) = fraction {
        out.push(style.decimal_separator);
        out.push_str(fraction);
    }
    out
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx != 0 && (len - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

pub fn format_date(style: DateStyle, date: NaiveDate) -> String {
    match style {
        DateStyle::Short => date.format("%Y-%m-%d").to_string(),
        DateStyle::Medium => format!(
            "{} {:02} {} {}",
            date.weekday(),
            date.day(),
            month_label(date.month()),
            date.year()
        ),
    }
}

fn month_label(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "",
    }
}
