use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::Utc;
use paycycle_config::snapshot::{list_snapshots, write_atomic, SnapshotName};
use paycycle_core::{BookBackupInfo, BookStorage, CoreError};
use paycycle_domain::Book;
use tracing::{debug, info, warn};

const BOOK_FILE: &str = "book.json";
const BACKUP_PREFIX: &str = "book";
const DEFAULT_RETENTION: usize = 5;

/// Filesystem-backed JSON persistence for the book and its backups.
///
/// Layout under the data root:
/// `book.json` plus `backups/book_<YYYYMMDD>_<HHMM>[_<note>].json`.
#[derive(Debug, Clone)]
pub struct JsonBookStorage {
    book_path: PathBuf,
    backups_dir: PathBuf,
    retention: usize,
}

impl JsonBookStorage {
    pub fn new(root: &Path) -> Result<Self, CoreError> {
        Self::with_retention(root, DEFAULT_RETENTION)
    }

    pub fn with_retention(root: &Path, retention: usize) -> Result<Self, CoreError> {
        let backups_dir = root.join("backups");
        fs::create_dir_all(&backups_dir)?;
        Ok(Self {
            book_path: root.join(BOOK_FILE),
            backups_dir,
            retention: retention.max(1),
        })
    }

    pub fn book_path(&self) -> &Path {
        &self.book_path
    }

    pub fn backups_dir(&self) -> &Path {
        &self.backups_dir
    }

    fn write_snapshot(&self, json: &str, note: Option<&str>) -> Result<BookBackupInfo, CoreError> {
        let name = SnapshotName::new(BACKUP_PREFIX, Utc::now(), note);
        let id = name.file_name();
        let path = self.backups_dir.join(&id);
        write_atomic(&path, json)?;
        self.prune_backups()?;
        Ok(BookBackupInfo {
            id,
            created_at: Some(name.created_at),
            path,
        })
    }

    fn prune_backups(&self) -> Result<(), CoreError> {
        let entries = list_snapshots(&self.backups_dir, BACKUP_PREFIX)?;
        for (name, path) in entries.into_iter().skip(self.retention) {
            debug!(backup = %name.file_name(), "pruning old backup");
            if let Err(err) = fs::remove_file(&path) {
                warn!(path = %path.display(), error = %err, "failed to prune backup");
            }
        }
        Ok(())
    }
}

impl BookStorage for JsonBookStorage {
    fn load_book(&self) -> Result<Book, CoreError> {
        if !self.book_path.exists() {
            info!(path = %self.book_path.display(), "no book on disk; starting empty");
            return Ok(Book::new());
        }
        read_book(&self.book_path)
    }

    /// The previous file, if any, is copied into the backups before being replaced.
    fn save_book(&self, book: &Book) -> Result<(), CoreError> {
        if self.book_path.exists() {
            let previous = fs::read_to_string(&self.book_path)?;
            self.write_snapshot(&previous, None)?;
        }
        write_atomic(&self.book_path, &to_json(book)?)?;
        debug!(path = %self.book_path.display(), bills = book.bills.len(), "saved book");
        Ok(())
    }

    fn backup_book(&self, book: &Book, note: Option<&str>) -> Result<BookBackupInfo, CoreError> {
        let info = self.write_snapshot(&to_json(book)?, note)?;
        info!(backup = %info.id, "book backup written");
        Ok(info)
    }

    fn list_backups(&self) -> Result<Vec<BookBackupInfo>, CoreError> {
        Ok(list_snapshots(&self.backups_dir, BACKUP_PREFIX)?
            .into_iter()
            .map(|(name, path)| BookBackupInfo {
                id: name.file_name(),
                created_at: Some(name.created_at),
                path,
            })
            .collect())
    }

    fn restore_backup(&self, id: &str) -> Result<Book, CoreError> {
        let path = self.backups_dir.join(id);
        if SnapshotName::parse(BACKUP_PREFIX, id).is_none() || !path.is_file() {
            return Err(CoreError::Storage(format!("backup `{id}` not found")));
        }
        let book = read_book(&path)?;
        write_atomic(&self.book_path, &to_json(&book)?)?;
        info!(backup = %id, "book restored");
        Ok(book)
    }
}

/// Loads a book from an arbitrary path on disk.
pub fn read_book(path: &Path) -> Result<Book, CoreError> {
    let data = fs::read_to_string(path)?;
    serde_json::from_str(&data).map_err(|err| CoreError::Serde(err.to_string()))
}

fn to_json(book: &Book) -> Result<String, CoreError> {
    serde_json::to_string_pretty(book).map_err(|err| CoreError::Serde(err.to_string()))
}
