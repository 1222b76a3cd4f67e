//! Filesystem file source for Henry.
//!
//! This crate provides [`FsSource`], a filesystem-based implementation of the
//! [`FileSource`](henry_storage::FileSource) trait. For every file below the
//! root it:
//!
//! - Classifies the file against the root (markdown vs unknown, sub-path)
//! - Records the modification time
//! - Reads the bytes of markdown files and splits off their front matter
//!
//! Walk failures abort discovery. A markdown file that cannot be read or whose
//! front matter does not parse is logged and skipped.
//!
//! # Example
//!
//! ```ignore
//! use henry_storage::FileSource;
//! use henry_storage_fs::FsSource;
//!
//! let source = FsSource::new("data/");
//! let discovery = source.discover()?;
//! for file in discovery.files {
//!     println!("{}{}", file.sub_path, file.name);
//! }
//! ```

mod scanner;

use std::fs;
use std::path::{Path, PathBuf};

use henry_storage::{Discovery, FileRecord, FileSource, SkippedFile, StorageError};
use scanner::Entry;

/// Filesystem-backed file source.
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    /// Create a source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory of this source.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FileSource for FsSource {
    fn discover(&self) -> Result<Discovery, StorageError> {
        let entries = scanner::scan(&self.root)?;
        let root = self.root.to_string_lossy();

        let mut discovery = Discovery::default();
        for entry in entries {
            match prepare(entry, &root) {
                Ok(record) => discovery.files.push(record),
                Err(skipped) => {
                    tracing::warn!(
                        path = %skipped.path.display(),
                        error = %skipped.reason,
                        "Skipping file"
                    );
                    discovery.skipped.push(skipped);
                }
            }
        }

        tracing::info!(
            files = discovery.files.len(),
            skipped = discovery.skipped.len(),
            "Discovery completed"
        );

        Ok(discovery)
    }
}

/// Turn a scanned entry into a classified, parsed record.
fn prepare(entry: Entry, root: &str) -> Result<FileRecord, SkippedFile> {
    let mut record = FileRecord::new(entry.name, entry.path).with_modified(entry.modified);
    record.classify(root);

    tracing::debug!(path = %record.path.display(), kind = ?record.kind, "Discovered file");

    if !record.is_markdown() {
        return Ok(record);
    }

    record.data = fs::read(&record.path)
        .map_err(|e| SkippedFile::new(&record.path, StorageError::io(e, &record.path)))?;
    record
        .parse_front_matter()
        .map_err(|e| SkippedFile::new(&record.path, e))?;

    Ok(record)
}
