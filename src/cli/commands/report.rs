use paycycle_core::SummaryService;
use paycycle_domain::CalendarMonth;

use crate::cli::context::ShellContext;
use crate::cli::errors::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "period",
            "Show money left in the current pay period",
            "period",
            cmd_period,
        ),
        CommandEntry::new(
            "month",
            "Show income and bills for a calendar month",
            "month [YYYY-MM]",
            cmd_month,
        ),
        CommandEntry::new(
            "summary",
            "Show the pay period, this month and upcoming bills",
            "summary",
            cmd_summary,
        ),
    ]
}

fn cmd_period(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let report = SummaryService::pay_period(&context.book, context.today())
        .ok_or(CommandError::NoPaySchedule)?;
    output::block(&context.renderer().pay_period(&report));
    Ok(())
}

fn cmd_month(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let month = match args {
        [] => CalendarMonth::containing(context.today()),
        [raw] => raw.parse::<CalendarMonth>().map_err(|_| {
            CommandError::InvalidArguments(format!("`{raw}` is not a month (expected YYYY-MM)"))
        })?,
        _ => return Err(CommandError::usage("month [YYYY-MM]")),
    };
    let report = SummaryService::month(&context.book, month).ok_or(CommandError::NoPaySchedule)?;
    output::block(&context.renderer().month(&report));
    Ok(())
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let today = context.today();
    let renderer = context.renderer();

    output::section("Pay period");
    match SummaryService::pay_period(&context.book, today) {
        Some(report) => output::block(&renderer.pay_period(&report)),
        None => output::warning(CommandError::NoPaySchedule),
    }

    if let Some(report) = SummaryService::month(&context.book, CalendarMonth::containing(today)) {
        output::section("This month");
        output::block(&renderer.month(&report));
    }

    output::section("Bills");
    let due = SummaryService::bills_by_current_occurrence(&context.book.bills, today);
    output::block(&renderer.bill_list(today, &due));
    Ok(())
}
