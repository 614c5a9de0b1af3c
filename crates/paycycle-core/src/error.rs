use std::io;

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Bill not found: {0}")]
    BillNotFound(Uuid),
    #[error("No bill matches `{0}`")]
    NoMatch(String),
    #[error("`{0}` matches more than one bill; use a longer id prefix")]
    AmbiguousMatch(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
