//! File naming and atomic writes shared by every snapshot on disk.
//!
//! Snapshots are named `<prefix>_<YYYYMMDD>_<HHMM>[_<note>].json`.

use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use chrono::{DateTime, NaiveDateTime, Utc};

pub const SNAPSHOT_EXTENSION: &str = "json";
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M";
const TMP_SUFFIX: &str = "tmp";

/// Parsed pieces of a snapshot file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotName {
    pub prefix: String,
    pub created_at: DateTime<Utc>,
    pub note: Option<String>,
}

impl SnapshotName {
    pub fn new(prefix: &str, created_at: DateTime<Utc>, note: Option<&str>) -> Self {
        Self {
            prefix: prefix.to_string(),
            created_at,
            note: slug(note),
        }
    }

    pub fn file_name(&self) -> String {
        let mut name = format!("{}_{}", self.prefix, self.created_at.format(TIMESTAMP_FORMAT));
        if let Some(note) = &self.note {
            name.push('_');
            name.push_str(note);
        }
        name.push('.');
        name.push_str(SNAPSHOT_EXTENSION);
        name
    }

    /// Reads a file name back. Returns `None` for anything not shaped like a
    /// snapshot with the given prefix.
    pub fn parse(prefix: &str, file_name: &str) -> Option<Self> {
        let stem = file_name.strip_suffix(&format!(".{SNAPSHOT_EXTENSION}"))?;
        let rest = stem.strip_prefix(prefix)?.strip_prefix('_')?;
        let mut parts = rest.splitn(3, '_');
        let day = parts.next()?;
        let time = parts.next()?;
        if day.len() != 8 || time.len() != 4 {
            return None;
        }
        let naive = NaiveDateTime::parse_from_str(&format!("{day}_{time}"), TIMESTAMP_FORMAT).ok()?;
        Some(Self {
            prefix: prefix.to_string(),
            created_at: DateTime::from_naive_utc_and_offset(naive, Utc),
            note: parts.next().map(str::to_string),
        })
    }
}

/// Lower-case, dash-separated form of a free-text note; `None` if nothing usable remains.
pub fn slug(note: Option<&str>) -> Option<String> {
    let mut out = String::new();
    let mut pending_dash = false;
    for ch in note?.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(ch.to_ascii_lowercase());
        } else if ch.is_whitespace() || matches!(ch, '-' | '.' | '_') {
            pending_dash = true;
        }
    }
    (!out.is_empty()).then_some(out)
}

/// Lists snapshot files in `dir` carrying `prefix`, newest first.
/// A missing directory yields an empty list.
pub fn list_snapshots(dir: &Path, prefix: &str) -> io::Result<Vec<(SnapshotName, PathBuf)>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let mut found = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        if let Some(name) = SnapshotName::parse(prefix, file_name) {
            found.push((name, path));
        }
    }
    found.sort_by(|a, b| {
        b.0.created_at
            .cmp(&a.0.created_at)
            .then_with(|| b.1.cmp(&a.1))
    });
    Ok(found)
}

/// Writes `data` beside `path` first, then renames it into place.
pub fn write_atomic(path: &Path, data: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(data.as_bytes())?;
    file.sync_all()?;
    drop(file);
    fs::rename(&tmp, path)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{TMP_SUFFIX}"),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn names_round_trip_with_note() {
        let at = Utc.with_ymd_and_hms(2024, 6, 15, 9, 30, 0).unwrap();
        let name = SnapshotName::new("book", at, Some("Before June  rent!"));
        assert_eq!(name.file_name(), "book_20240615_0930_before-june-rent.json");
        assert_eq!(SnapshotName::parse("book", &name.file_name()), Some(name));
    }

    #[test]
    fn parse_rejects_foreign_files() {
        assert!(SnapshotName::parse("book", "config_20240615_0930.json").is_none());
        assert!(SnapshotName::parse("book", "book_2024_0930.json").is_none());
        assert!(SnapshotName::parse("book", "book_20240615_0930.txt").is_none());
    }

    #[test]
    fn slug_drops_punctuation_only_notes() {
        assert_eq!(slug(Some("  ...  ")), None);
        assert_eq!(slug(None), None);
        assert_eq!(slug(Some("-pre.tax-")), Some("pre-tax".into()));
    }
}
