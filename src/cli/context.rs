//! Shared runtime state for CLI interactions and command execution.

use std::{env, path::PathBuf, sync::Arc};

use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Confirm};
use paycycle_config::{Config, ConfigManager};
use paycycle_core::{BookStorage, Clock, FixedClock};
use paycycle_domain::Book;
use paycycle_storage_json::JsonBookStorage;
use strsim::levenshtein;
use tracing::debug;

use crate::cli::{
    commands,
    errors::{CliError, CommandError},
    output,
    registry::{CommandEntry, CommandRegistry},
    render::ReportRenderer,
    system_clock::SystemClock,
};
use crate::currency::Presentation;
use crate::errors::AppError;

const TODAY_ENV: &str = "PAYCYCLE_TODAY";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub theme: ColorfulTheme,
    pub base_dir: PathBuf,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub storage: JsonBookStorage,
    pub book: Book,
    pub clock: Arc<dyn Clock>,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    /// Loads configuration and the book from `Config::app_base_dir()`.
    pub fn new(mode: CliMode) -> Result<Self, AppError> {
        Self::with_base_dir(mode, Config::app_base_dir(), clock_from_env()?)
    }

    pub fn with_base_dir(
        mode: CliMode,
        base_dir: PathBuf,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, AppError> {
        let config_manager = ConfigManager::with_base_dir(&base_dir)?;
        let config = config_manager.load()?;
        let storage = JsonBookStorage::new(&config.resolve_data_root(&base_dir))?;
        let book = storage.load_book()?;
        output::set_color_enabled(config.ui_color_enabled);
        debug!(base = %base_dir.display(), bills = book.bills.len(), "shell context ready");

        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        Ok(Self {
            mode,
            registry,
            theme: ColorfulTheme::default(),
            base_dir,
            config_manager,
            config,
            storage,
            book,
            clock,
            last_command: None,
            running: true,
        })
    }

    pub fn prompt(&self) -> String {
        format!("paycycle [{}]> ", self.today())
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn presentation(&self) -> Presentation {
        Presentation::from_config(&self.config)
    }

    pub fn renderer(&self) -> ReportRenderer {
        ReportRenderer::new(self.presentation())
    }

    pub fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    /// Applies `change` to a copy of the book. The copy replaces the loaded
    /// book only once storage has accepted it.
    pub fn update_book<T, F>(&mut self, change: F) -> Result<T, CommandError>
    where
        F: FnOnce(&mut Book) -> Result<T, CommandError>,
    {
        let mut draft = self.book.clone();
        let value = change(&mut draft)?;
        draft.touch();
        self.storage.save_book(&draft)?;
        self.book = draft;
        Ok(value)
    }

    /// Applies a new configuration: saved, then used for subsequent output.
    /// A changed data root reopens storage and reloads the book from there.
    pub fn apply_config(&mut self, config: Config) -> Result<(), CommandError> {
        self.config_manager.save(&config)?;
        let old_root = self.config.resolve_data_root(&self.base_dir);
        let new_root = config.resolve_data_root(&self.base_dir);
        output::set_color_enabled(config.ui_color_enabled);
        self.config = config;
        if old_root != new_root {
            self.storage = JsonBookStorage::new(&new_root)?;
            self.book = self.storage.load_book()?;
            output::info(format!("Data root is now {}", new_root.display()));
        }
        Ok(())
    }

    /// Asks a yes/no question. Script mode always answers yes.
    pub fn confirm(&self, prompt: &str) -> Result<bool, CommandError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(CommandError::from)
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{input}`. Type `help` to see available commands."
        ));

        let needle = input.to_ascii_lowercase();
        let best = self
            .registry
            .names()
            .map(|key| (levenshtein(key, &needle), key))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = best {
            if distance <= 3 {
                output::hint(format!("Did you mean `{best}`?"));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt("Exit shell?")
            .default(true)
            .interact()?)
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
            }
            CommandError::Frequency(value) => {
                output::error(format!("Unknown frequency `{value}`"));
                output::hint("Frequencies: one-time, weekly, bi-weekly, every-3-weeks, monthly.");
            }
            other => output::error(other),
        }
    }
}

fn clock_from_env() -> Result<Arc<dyn Clock>, AppError> {
    match env::var(TODAY_ENV) {
        Ok(raw) if !raw.trim().is_empty() => {
            let today = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|err| {
                AppError::Environment {
                    name: TODAY_ENV,
                    message: err.to_string(),
                }
            })?;
            Ok(Arc::new(FixedClock::new(today)))
        }
        _ => Ok(Arc::new(SystemClock)),
    }
}
