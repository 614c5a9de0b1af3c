#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::{assert::Assert, Command};
use once_cell::sync::Lazy;
use regex::Regex;
use tempfile::TempDir;

/// Reference date every scripted session runs on.
pub const TODAY: &str = "2024-06-15";

/// Matches the file names written by `backup` and `config backup`.
pub static BACKUP_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(book|config)_\d{8}_\d{4}(_[a-z0-9-]+)?\.json").expect("regex"));

/// An isolated `PAYCYCLE_HOME` for one test.
pub struct Workspace {
    home: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            home: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn home(&self) -> &Path {
        self.home.path()
    }

    pub fn book_path(&self) -> PathBuf {
        self.home().join("data").join("book.json")
    }

    /// Runs `lines` through the shell in script mode.
    pub fn script(&self, lines: &[&str]) -> Assert {
        let mut input = lines.join("\n");
        input.push('\n');
        Command::cargo_bin("paycycle_cli")
            .expect("binary built")
            .env("PAYCYCLE_CLI_SCRIPT", "1")
            .env("PAYCYCLE_HOME", self.home())
            .env("PAYCYCLE_TODAY", TODAY)
            .env_remove("RUST_LOG")
            .write_stdin(input)
            .assert()
    }
}
