use std::io;

use paycycle_config::ConfigError;
use paycycle_core::CoreError;
use paycycle_domain::{DateWindowError, ParseFrequencyError};
use rustyline::error::ReadlineError;
use thiserror::Error;

use crate::errors::AppError;

pub type CommandResult = Result<(), CommandError>;

/// Errors that end the shell itself.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    App(#[from] AppError),
    #[error("Line editor error: {0}")]
    Readline(#[from] ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Prompt error: {0}")]
    Dialoguer(#[from] dialoguer::Error),
}

/// Errors raised by a single command; reported and the shell carries on.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("No pay schedule configured. Use `pay set <amount> <last-payday> <frequency>` first.")]
    NoPaySchedule,
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Window(#[from] DateWindowError),
    #[error("Unknown frequency `{0}`")]
    Frequency(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<ParseFrequencyError> for CommandError {
    fn from(err: ParseFrequencyError) -> Self {
        CommandError::Frequency(err.0)
    }
}

impl CommandError {
    pub(crate) fn usage(usage: &str) -> Self {
        CommandError::InvalidArguments(format!("Usage: {usage}"))
    }
}
