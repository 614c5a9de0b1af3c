use paycycle_core::PayService;
use paycycle_domain::PaySchedule;

use super::{parse_amount, parse_date, parse_pay_frequency};
use crate::cli::context::ShellContext;
use crate::cli::errors::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;

const USAGE: &str = "pay set <amount> <last-payday> <weekly|bi-weekly|monthly>
pay show
pay clear";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new("pay", "Configure the pay schedule", USAGE, cmd_pay)]
}

fn cmd_pay(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((action, rest)) = args.split_first() else {
        return show_pay(context);
    };
    match action.to_ascii_lowercase().as_str() {
        "set" => set_pay(context, rest),
        "show" => show_pay(context),
        "clear" => clear_pay(context),
        other => Err(CommandError::InvalidArguments(format!(
            "Unknown pay action `{other}`. Usage:\n{USAGE}"
        ))),
    }
}

fn set_pay(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [amount, last_payday, frequency] = args else {
        return Err(CommandError::usage(
            "pay set <amount> <last-payday> <weekly|bi-weekly|monthly>",
        ));
    };
    let schedule = PaySchedule::new(
        parse_amount(amount)?,
        parse_date(last_payday)?,
        parse_pay_frequency(frequency)?,
    );
    context.update_book(|book| Ok(PayService::set(book, schedule)?))?;
    if let Some(schedule) = &context.book.pay_schedule {
        output::success(format!(
            "Pay schedule set: {}.",
            context.renderer().pay_schedule(schedule)
        ));
    }
    Ok(())
}

fn show_pay(context: &mut ShellContext) -> CommandResult {
    let schedule = context
        .book
        .pay_schedule
        .as_ref()
        .ok_or(CommandError::NoPaySchedule)?;
    output::info(format!("Pay: {}", context.renderer().pay_schedule(schedule)));
    Ok(())
}

fn clear_pay(context: &mut ShellContext) -> CommandResult {
    if context.book.pay_schedule.is_none() {
        output::info("No pay schedule to clear.");
        return Ok(());
    }
    context.update_book(|book| Ok(PayService::clear(book)))?;
    output::success("Pay schedule cleared.");
    Ok(())
}
