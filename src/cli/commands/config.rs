use paycycle_config::Config;

use super::note_from;
use crate::cli::context::ShellContext;
use crate::cli::errors::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;

const USAGE: &str = "config show
config set <locale|currency|precision|color|date-style|data-root> <value>
config backup [note]
config backups
config restore <name>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View and manage preferences",
        USAGE,
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((action, rest)) = args.split_first() else {
        return show_config(context);
    };
    match action.to_ascii_lowercase().as_str() {
        "show" => show_config(context),
        "set" => set_config(context, rest),
        "backup" => {
            let name = context
                .config_manager
                .backup(&context.config, note_from(rest).as_deref())?;
            output::success(format!("Configuration backup written: {name}"));
            Ok(())
        }
        "backups" => {
            let names = context.config_manager.list_backups()?;
            if names.is_empty() {
                output::info("No configuration backups yet.");
            }
            for (idx, name) in names.iter().enumerate() {
                output::info(format!("{:>2}. {name}", idx + 1));
            }
            Ok(())
        }
        "restore" => {
            let [name] = rest else {
                return Err(CommandError::usage("config restore <name>"));
            };
            let restored = context.config_manager.restore(name)?;
            context.apply_config(restored)?;
            output::success(format!("Configuration restored from {name}."));
            Ok(())
        }
        other => Err(CommandError::InvalidArguments(format!(
            "Unknown config action `{other}`. Usage:\n{USAGE}"
        ))),
    }
}

fn show_config(context: &mut ShellContext) -> CommandResult {
    output::section("Configuration");
    for (key, value) in context.config.entries() {
        output::info(format!("{key:<12} {value}"));
    }
    output::info(format!(
        "{:<12} {}",
        "file",
        context.config_manager.config_path().display()
    ));
    Ok(())
}

fn set_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [key, value @ ..] = args else {
        return Err(CommandError::usage("config set <key> <value>"));
    };
    if value.is_empty() {
        return Err(CommandError::InvalidArguments(format!(
            "Missing value for `{key}`. Keys: {}",
            Config::KEYS.join(", ")
        )));
    }
    let mut updated = context.config.clone();
    updated.set_value(key, &value.join(" "))?;
    context.apply_config(updated)?;
    output::success(format!("Set {key}."));
    Ok(())
}
