use paycycle_domain::CURRENT_SCHEMA_VERSION;

use crate::cli::context::ShellContext;
use crate::cli::errors::{CommandError, CommandResult};
use crate::cli::help;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::utils::build_info;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "version",
            "Show build metadata",
            "version [--json]",
            cmd_version,
        ),
        CommandEntry::new("help", "Show available commands", "help [command]", cmd_help),
        CommandEntry::new("exit", "Exit the shell", "exit", cmd_exit),
    ]
}

fn cmd_version(_context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    if args.iter().any(|arg| arg.eq_ignore_ascii_case("--json")) {
        let json = serde_json::to_string_pretty(&meta)
            .map_err(|err| CommandError::InvalidArguments(err.to_string()))?;
        output::block(&json);
        return Ok(());
    }
    output::section(format!("Paycycle {}", meta.version));
    let mut rows = meta.rows();
    rows.insert(1, ("Book schema", format!("v{CURRENT_SCHEMA_VERSION}")));
    for (label, value) in rows {
        output::info(format!("{label:<12} {value}"));
    }
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        match context.command(&name.to_lowercase()) {
            Some(entry) => help::print_command(entry),
            None => context.suggest_command(name),
        }
        return Ok(());
    }

    help::print_overview(&context.registry);
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
