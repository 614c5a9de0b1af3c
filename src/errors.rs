use paycycle_config::ConfigError;
use paycycle_core::CoreError;
use thiserror::Error;

/// Failures while bootstrapping the application: loading configuration,
/// opening storage or reading the book.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid environment value for {name}: {message}")]
    Environment { name: &'static str, message: String },
}
