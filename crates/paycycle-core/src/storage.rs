use std::path::PathBuf;

use chrono::{DateTime, Utc};
use paycycle_domain::Book;

use crate::CoreError;

/// Metadata describing a stored book snapshot.
#[derive(Debug, Clone)]
pub struct BookBackupInfo {
    pub id: String,
    pub created_at: Option<DateTime<Utc>>,
    pub path: PathBuf,
}

/// Persistence seam for the [`Book`]; implemented outside the core.
pub trait BookStorage {
    /// Loads the book, or an empty one when nothing has been saved yet.
    fn load_book(&self) -> Result<Book, CoreError>;

    fn save_book(&self, book: &Book) -> Result<(), CoreError>;

    fn backup_book(&self, book: &Book, note: Option<&str>) -> Result<BookBackupInfo, CoreError>;

    /// Snapshots, newest first.
    fn list_backups(&self) -> Result<Vec<BookBackupInfo>, CoreError>;

    /// Replaces the current book with the named snapshot and returns it.
    fn restore_backup(&self, id: &str) -> Result<Book, CoreError>;
}
