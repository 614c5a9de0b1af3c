use paycycle_core::{BillService, SummaryService};
use paycycle_domain::Bill;

use super::{parse_amount, parse_date, parse_frequency};
use crate::cli::context::ShellContext;
use crate::cli::errors::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;

const USAGE: &str = "bill add <name> <amount> <due-date> <frequency> [--existing]
bill edit <bill> <name|amount|due|frequency|existing> <value>
bill remove <bill>
bill show <bill>
bill list";

const EXISTING_FLAG: &str = "--existing";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new("bill", "Add, edit, remove and list bills", USAGE, cmd_bill)]
}

fn cmd_bill(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((action, rest)) = args.split_first() else {
        return list_bills(context);
    };
    match action.to_ascii_lowercase().as_str() {
        "add" => add_bill(context, rest),
        "edit" => edit_bill(context, rest),
        "remove" | "rm" => remove_bill(context, rest),
        "show" => show_bill(context, rest),
        "list" | "ls" => list_bills(context),
        other => Err(CommandError::InvalidArguments(format!(
            "Unknown bill action `{other}`. Usage:\n{USAGE}"
        ))),
    }
}

fn add_bill(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let existing = args.iter().any(|arg| arg.eq_ignore_ascii_case(EXISTING_FLAG));
    let positional: Vec<&str> = args
        .iter()
        .copied()
        .filter(|arg| !arg.eq_ignore_ascii_case(EXISTING_FLAG))
        .collect();
    let [name, amount, due, frequency] = positional.as_slice() else {
        return Err(CommandError::usage(
            "bill add <name> <amount> <due-date> <frequency> [--existing]",
        ));
    };

    let frequency = parse_frequency(frequency)?;
    let bill = Bill::new(*name, parse_amount(amount)?, parse_date(due)?, frequency)
        .with_existing_recurring(existing && frequency.is_recurring());
    let id = context.update_book(|book| Ok(BillService::add(book, bill)?))?;

    if let Some(bill) = context.book.bill(id) {
        let current = paycycle_core::resolve_current_occurrence(bill, context.today());
        output::success(format!(
            "Added bill `{}`; next due {}.",
            bill.name,
            context.presentation().date(current)
        ));
    }
    Ok(())
}

fn edit_bill(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [query, field, value @ ..] = args else {
        return Err(CommandError::usage(
            "bill edit <bill> <name|amount|due|frequency|existing> <value>",
        ));
    };
    if value.is_empty() {
        return Err(CommandError::usage(
            "bill edit <bill> <name|amount|due|frequency|existing> <value>",
        ));
    }
    let value = value.join(" ");
    let id = BillService::find(&context.book, query)?.id;

    let field = field.to_ascii_lowercase();
    context.update_book(|book| {
        match field.as_str() {
            "name" => BillService::update(book, id, |bill| bill.name = value.clone())?,
            "amount" => {
                let amount = parse_amount(&value)?;
                BillService::update(book, id, |bill| bill.amount = amount)?
            }
            "due" | "due-date" | "date" => {
                let due = parse_date(&value)?;
                BillService::update(book, id, |bill| bill.due_date = due)?
            }
            "frequency" => {
                let frequency = parse_frequency(&value)?;
                BillService::update(book, id, |bill| {
                    bill.frequency = frequency;
                    if !frequency.is_recurring() {
                        bill.existing_recurring = false;
                    }
                })?
            }
            "existing" => {
                let existing = match value.to_ascii_lowercase().as_str() {
                    "yes" | "true" | "on" | "1" => true,
                    "no" | "false" | "off" | "0" => false,
                    _ => {
                        return Err(CommandError::InvalidArguments(
                            "`existing` takes yes or no".into(),
                        ))
                    }
                };
                BillService::update(book, id, |bill| {
                    bill.existing_recurring = existing && bill.frequency.is_recurring();
                })?
            }
            other => {
                return Err(CommandError::InvalidArguments(format!(
                    "Unknown bill field `{other}`"
                )))
            }
        }
        Ok(())
    })?;
    output::success("Bill updated.");
    Ok(())
}

fn remove_bill(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [query] = args else {
        return Err(CommandError::usage("bill remove <bill>"));
    };
    let bill = BillService::find(&context.book, query)?;
    let (id, name) = (bill.id, bill.name.clone());
    if !context.confirm(&format!("Remove bill `{name}`?"))? {
        output::info("Operation cancelled.");
        return Ok(());
    }
    context.update_book(|book| Ok(BillService::remove(book, id)?))?;
    output::success(format!("Removed bill `{name}`."));
    Ok(())
}

fn show_bill(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [query] = args else {
        return Err(CommandError::usage("bill show <bill>"));
    };
    let bill = BillService::find(&context.book, query)?;
    output::block(&context.renderer().bill_detail(bill));
    Ok(())
}

fn list_bills(context: &mut ShellContext) -> CommandResult {
    let today = context.today();
    let due = SummaryService::bills_by_current_occurrence(&context.book.bills, today);
    output::block(&context.renderer().bill_list(today, &due));
    Ok(())
}
