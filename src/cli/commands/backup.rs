use paycycle_core::BookStorage;

use super::note_from;
use crate::cli::context::ShellContext;
use crate::cli::errors::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "backup",
            "Snapshot the book with an optional note",
            "backup [note]",
            cmd_backup,
        ),
        CommandEntry::new("backups", "List book snapshots, newest first", "backups", cmd_backups),
        CommandEntry::new(
            "restore",
            "Replace the book with a snapshot",
            "restore <name|index>",
            cmd_restore,
        ),
    ]
}

fn cmd_backup(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let note = note_from(args);
    let info = context.storage.backup_book(&context.book, note.as_deref())?;
    output::success(format!("Backup written: {}", info.id));
    Ok(())
}

fn cmd_backups(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let backups = context.storage.list_backups()?;
    if backups.is_empty() {
        output::info("No backups yet.");
        return Ok(());
    }
    for (idx, backup) in backups.iter().enumerate() {
        let when = backup
            .created_at
            .map(|at| at.format("%Y-%m-%d %H:%M UTC").to_string())
            .unwrap_or_else(|| "unknown time".into());
        output::info(format!("{:>2}. {}  ({when})", idx + 1, backup.id));
    }
    Ok(())
}

fn cmd_restore(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [reference] = args else {
        return Err(CommandError::usage("restore <name|index>"));
    };
    let id = match reference.parse::<usize>() {
        Ok(index) => {
            let backups = context.storage.list_backups()?;
            index
                .checked_sub(1)
                .and_then(|idx| backups.get(idx))
                .map(|info| info.id.clone())
                .ok_or_else(|| {
                    CommandError::InvalidArguments(format!("No backup numbered {index}"))
                })?
        }
        Err(_) => reference.to_string(),
    };
    if !context.confirm(&format!("Replace the current book with `{id}`?"))? {
        output::info("Operation cancelled.");
        return Ok(());
    }
    context.book = context.storage.restore_backup(&id)?;
    output::success(format!(
        "Restored {id} ({} bills).",
        context.book.bills.len()
    ));
    Ok(())
}
