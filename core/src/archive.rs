//! Date-keyed archive of persisted theme records.
//!
//! One JSON document per generated date (`<root>/<YYYY-MM-DD>.json`) plus
//! a single mutable alias, `<root>/latest.json`, that always equals the
//! record for the current date at the time of the last generation. The
//! generator is the only writer; the resolver only reads.

use crate::dates;
use crate::error::{ThemeError, ThemeResult};
use crate::theme::types::{ThemeDate, ThemeRecord};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

const LATEST_ALIAS: &str = "latest";

pub struct ThemeArchive {
    root: PathBuf,
}

impl ThemeArchive {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File path for a date's record.
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.root.join(format!("{}.json", dates::iso(date)))
    }

    /// File path for the `latest` alias.
    pub fn latest_path(&self) -> PathBuf {
        self.root.join(format!("{LATEST_ALIAS}.json"))
    }

    /// Persist a dated record under its ISO filename, creating the
    /// archive directory on first write. Remix records are never
    /// persisted; passing one is a programming error surfaced as a write
    /// failure rather than a panic.
    pub fn write(&self, record: &ThemeRecord) -> ThemeResult<()> {
        let date = match record.date {
            ThemeDate::Day(date) => date,
            ThemeDate::Remixed => {
                return Err(ThemeError::ArchiveWrite {
                    path: self.root.clone(),
                    reason: "remix records are ephemeral and cannot be archived".to_string(),
                });
            }
        };
        self.write_at(&self.path_for(date), record)
    }

    /// Overwrite the `latest` alias with a copy of the given record.
    pub fn write_latest(&self, record: &ThemeRecord) -> ThemeResult<()> {
        self.write_at(&self.latest_path(), record)
    }

    fn write_at(&self, path: &Path, record: &ThemeRecord) -> ThemeResult<()> {
        fs::create_dir_all(&self.root).map_err(|e| ThemeError::ArchiveWrite {
            path: self.root.clone(),
            reason: format!("cannot create archive directory: {e}"),
        })?;

        let body = serde_json::to_string_pretty(record).map_err(|e| ThemeError::ArchiveWrite {
            path: path.to_path_buf(),
            reason: format!("cannot serialize record: {e}"),
        })?;
        fs::write(path, body).map_err(|e| ThemeError::ArchiveWrite {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        log::info!("saved theme to {}", path.display());
        Ok(())
    }

    /// Read the record archived for a calendar date.
    pub fn read_date(&self, date: NaiveDate) -> ThemeResult<ThemeRecord> {
        self.read_at(&self.path_for(date), &dates::iso(date))
    }

    /// Read the `latest` alias.
    pub fn read_latest(&self) -> ThemeResult<ThemeRecord> {
        self.read_at(&self.latest_path(), LATEST_ALIAS)
    }

    fn read_at(&self, path: &Path, key: &str) -> ThemeResult<ThemeRecord> {
        if !path.exists() {
            return Err(ThemeError::RecordNotFound {
                key: key.to_string(),
            });
        }
        let body = fs::read_to_string(path).map_err(|e| ThemeError::ArchiveRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&body).map_err(|e| ThemeError::ArchiveParse {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
