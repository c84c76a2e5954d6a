//! Scaffold Output
//!
//! Writes JSON documents into the output directory under timestamped names
//! (`{prefix}_{YYYYMMDDTHHMMSSZ}.json`). Two saves with the same prefix in the
//! same second overwrite each other.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tokio::fs;

/// UTC timestamp format used in output file names.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

// ============================================================================
// Errors
// ============================================================================

/// Failure while persisting a document. Not recovered anywhere.
#[derive(Error, Debug)]
pub enum PersistError {
    #[error("Failed to resolve working directory: {0}")]
    WorkingDir(#[source] std::io::Error),

    #[error("Failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type PersistResult<T> = std::result::Result<T, PersistError>;

// ============================================================================
// Output Store
// ============================================================================

/// Directory that receives generated documents.
#[derive(Debug, Clone)]
pub struct OutputStore {
    dir: PathBuf,
}

impl OutputStore {
    /// A relative `dir` is resolved against the working directory at save time.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Save `value` as pretty JSON and return the written path for display.
    pub async fn save_json<T: Serialize + ?Sized>(&self, value: &T, prefix: &str) -> PersistResult<String> {
        self.save_json_at(value, prefix, Utc::now()).await
    }

    /// As [`save_json`](Self::save_json), with an explicit timestamp.
    pub async fn save_json_at<T: Serialize + ?Sized>(
        &self,
        value: &T,
        prefix: &str,
        timestamp: DateTime<Utc>,
    ) -> PersistResult<String> {
        let cwd = std::env::current_dir().map_err(PersistError::WorkingDir)?;
        let dir = if self.dir.is_absolute() {
            self.dir.clone()
        } else {
            cwd.join(&self.dir)
        };

        fs::create_dir_all(&dir)
            .await
            .map_err(|source| PersistError::CreateDir {
                path: dir.clone(),
                source,
            })?;

        let path = dir.join(output_file_name(prefix, timestamp));
        let content = serde_json::to_string_pretty(value)?;

        fs::write(&path, content.as_bytes())
            .await
            .map_err(|source| PersistError::Write {
                path: path.clone(),
                source,
            })?;

        log::info!("saved {}", path.display());
        Ok(display_path(&path, &cwd))
    }
}

/// `{prefix}_{timestamp}.json`
pub fn output_file_name(prefix: &str, timestamp: DateTime<Utc>) -> String {
    format!("{}_{}.json", prefix, timestamp.format(TIMESTAMP_FORMAT))
}

/// Relative to `cwd` when `path` lies under it, otherwise unchanged.
fn display_path(path: &Path, cwd: &Path) -> String {
    path.strip_prefix(cwd)
        .unwrap_or(path)
        .display()
        .to_string()
}
