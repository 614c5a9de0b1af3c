pub mod backup;
pub mod bill;
pub mod config;
pub mod pay;
pub mod report;
pub mod system;

use chrono::NaiveDate;
use paycycle_domain::{Frequency, PayFrequency};

use crate::cli::errors::CommandError;
use crate::cli::registry::{CommandEntry, CommandRegistry};

const ROOT_COMMAND_ORDER: &[&str] = &[
    "bill", "pay", "period", "month", "summary", "backup", "backups", "restore", "config",
    "help", "version", "exit",
];

pub(crate) fn all_entries() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(bill::definitions());
    commands.extend(pay::definitions());
    commands.extend(report::definitions());
    commands.extend(backup::definitions());
    commands.extend(config::definitions());
    commands.extend(system::definitions());
    commands
}

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    let mut entries = all_entries();
    entries.sort_by_key(|entry| {
        ROOT_COMMAND_ORDER
            .iter()
            .position(|name| entry.name.eq_ignore_ascii_case(name))
            .unwrap_or(ROOT_COMMAND_ORDER.len())
    });
    for entry in entries {
        registry.register(entry);
    }
}

pub(crate) fn parse_amount(raw: &str) -> Result<f64, CommandError> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | '_'))
        .collect();
    cleaned
        .parse::<f64>()
        .map_err(|_| CommandError::InvalidArguments(format!("`{raw}` is not an amount")))
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        CommandError::InvalidArguments(format!("`{raw}` is not a date (expected YYYY-MM-DD)"))
    })
}

pub(crate) fn parse_frequency(raw: &str) -> Result<Frequency, CommandError> {
    match raw.parse::<Frequency>()? {
        Frequency::Unrecognized => Err(CommandError::Frequency(raw.to_string())),
        frequency => Ok(frequency),
    }
}

pub(crate) fn parse_pay_frequency(raw: &str) -> Result<PayFrequency, CommandError> {
    raw.parse::<PayFrequency>().map_err(|_| {
        CommandError::InvalidArguments(format!(
            "`{raw}` is not a pay frequency (weekly, bi-weekly or monthly)"
        ))
    })
}

/// Joins trailing words into an optional note: `backup before rent` -> `before rent`.
pub(crate) fn note_from(args: &[&str]) -> Option<String> {
    let note = args.join(" ");
    let trimmed = note.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_accept_currency_noise() {
        assert_eq!(parse_amount("$1,200.50").unwrap(), 1200.5);
        assert!(parse_amount("twelve").is_err());
    }

    #[test]
    fn unrecognized_is_not_a_user_frequency() {
        assert!(parse_frequency("unrecognized").is_err());
        assert_eq!(parse_frequency("Bi-Weekly").unwrap(), Frequency::BiWeekly);
    }

    #[test]
    fn register_all_follows_root_order() {
        let mut registry = CommandRegistry::new();
        register_all(&mut registry);
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, ROOT_COMMAND_ORDER);
    }
}
