//! Plain-text rendering of reports. Pure string building so it can be
//! snapshot-tested; printing happens in the command handlers.

use chrono::NaiveDate;
use paycycle_core::{DueBill, MonthlyReport, PayPeriodReport, WalkDiagnostic};
use paycycle_domain::{Bill, Frequency, PaySchedule};

use crate::currency::Presentation;

const AMOUNT_WIDTH: usize = 12;

pub struct ReportRenderer {
    presentation: Presentation,
}

impl ReportRenderer {
    pub fn new(presentation: Presentation) -> Self {
        Self { presentation }
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    /// Bills ordered by their next due date.
    pub fn bill_list(&self, today: NaiveDate, due: &[DueBill<'_>]) -> String {
        let p = &self.presentation;
        let mut lines = vec![format!("Bills as of {}", p.date(today))];
        if due.is_empty() {
            lines.push("  No bills yet. Add one with `bill add`.".into());
            return lines.join("\n");
        }
        let name_width = name_width(due.iter().map(|entry| entry.bill));
        for entry in due {
            let bill = entry.bill;
            let mut line = format!(
                "  {}  {:<name_width$}  {:>AMOUNT_WIDTH$}  {}",
                p.date(entry.current),
                bill.name,
                p.money(bill.amount),
                frequency_note(bill),
            );
            line.push_str(&format!("  [{}]", short_id(bill)));
            if let Some(diagnostic) = entry.diagnostic {
                line.push_str(&format!("  ! {diagnostic}"));
            }
            lines.push(line);
        }
        lines.join("\n")
    }

    /// Pay in, bills due before the next payday, and what is left.
    pub fn pay_period(&self, report: &PayPeriodReport<'_>) -> String {
        let p = &self.presentation;
        let mut lines = vec![format!(
            "Pay period {} to {} (next payday {})",
            p.date(report.window.start),
            p.date(report.window.last_day()),
            p.date(report.next_payday()),
        )];

        let name_width = name_width(report.due.occurrences.iter().map(|o| o.source));
        let date_width = p.date(report.window.start).chars().count();
        let label_width = date_width + name_width + 4;

        lines.push(format!(
            "{:<label_width$}{:>AMOUNT_WIDTH$}",
            "Pay",
            p.money(report.pay_amount)
        ));
        if report.due.is_empty() {
            lines.push("  No bills due this period.".into());
        }
        for occurrence in &report.due.occurrences {
            lines.push(format!(
                "  {}  {:<name_width$}{:>AMOUNT_WIDTH$}",
                p.date(occurrence.date),
                occurrence.source.name,
                p.money(occurrence.amount),
            ));
        }
        lines.push(format!(
            "{:<label_width$}{:>AMOUNT_WIDTH$}",
            "Due",
            p.money(report.total_due())
        ));
        lines.push(format!(
            "{:<label_width$}{:>AMOUNT_WIDTH$}",
            "Leftover",
            p.money(report.leftover)
        ));
        lines.extend(diagnostic_lines(&report.due.diagnostics));
        lines.join("\n")
    }

    pub fn month(&self, report: &MonthlyReport) -> String {
        let p = &self.presentation;
        let mut lines = vec![
            report.month.label(),
            format!("{:<10}{:>AMOUNT_WIDTH$}", "Income", p.money(report.income)),
            format!("{:<10}{:>AMOUNT_WIDTH$}", "Bills", p.money(report.expenses)),
            format!("{:<10}{:>AMOUNT_WIDTH$}", "Net", p.money(report.net)),
        ];
        lines.extend(diagnostic_lines(&report.diagnostics));
        lines.join("\n")
    }

    pub fn pay_schedule(&self, schedule: &PaySchedule) -> String {
        let p = &self.presentation;
        format!(
            "{} {} (last payday {})",
            p.money(schedule.amount),
            Frequency::from(schedule.frequency).label().to_lowercase(),
            p.date(schedule.last_payday),
        )
    }

    pub fn bill_detail(&self, bill: &Bill) -> String {
        let p = &self.presentation;
        [
            format!("Name        {}", bill.name),
            format!("Amount      {}", p.money(bill.amount)),
            format!("Due date    {}", p.date(bill.due_date)),
            format!("Frequency   {}", frequency_note(bill)),
            format!("Id          {}", bill.id),
        ]
        .join("\n")
    }
}

fn name_width<'a>(bills: impl Iterator<Item = &'a Bill>) -> usize {
    bills
        .map(|bill| bill.name.chars().count())
        .max()
        .unwrap_or(0)
        .max(4)
}

fn frequency_note(bill: &Bill) -> String {
    if bill.frequency.is_recurring() && bill.existing_recurring {
        format!("{} (existing)", bill.frequency.label())
    } else {
        bill.frequency.label().to_string()
    }
}

fn short_id(bill: &Bill) -> String {
    bill.id.simple().to_string().chars().take(8).collect()
}

fn diagnostic_lines(diagnostics: &[WalkDiagnostic]) -> Vec<String> {
    diagnostics
        .iter()
        .map(|diagnostic| format!("! schedule cut short: {diagnostic}"))
        .collect()
}
