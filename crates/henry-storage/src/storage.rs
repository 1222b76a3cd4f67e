//! File source trait and error types.
//!
//! Provides the [`FileSource`] trait for abstracting file discovery, along
//! with [`StorageError`] for discovery failures.
//!
//! # Failure Policy
//!
//! Discovery failures (unreadable directory, permission denied, missing root)
//! abort the whole run. Failures confined to a single file (unreadable bytes,
//! malformed front matter) are reported as [`SkippedFile`] entries and never
//! stop discovery.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::record::FileRecord;

/// Discovers files and prepares them as classified, parsed records.
pub trait FileSource {
    /// Enumerate every file below the source root.
    ///
    /// Records come back in discovery order. Files that failed individually
    /// are listed in [`Discovery::skipped`].
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the tree itself cannot be walked.
    fn discover(&self) -> Result<Discovery, StorageError>;
}

/// Output of a discovery run.
#[derive(Debug, Default)]
pub struct Discovery {
    /// Successfully prepared records.
    pub files: Vec<FileRecord>,
    /// Files that could not be prepared.
    pub skipped: Vec<SkippedFile>,
}

/// A file dropped from processing with the reason why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    /// Path of the file.
    pub path: PathBuf,
    /// Human readable failure reason.
    pub reason: String,
}

impl SkippedFile {
    /// Create a skipped file entry.
    pub fn new(path: impl Into<PathBuf>, reason: impl fmt::Display) -> Self {
        Self {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Semantic error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum StorageErrorKind {
    /// Resource does not exist.
    NotFound,
    /// Permission denied.
    PermissionDenied,
    /// Path exists but is not usable as a source root.
    InvalidPath,
    /// Other/unknown error category.
    Other,
}

/// Storage error with semantic kind and underlying source.
#[derive(Debug)]
pub struct StorageError {
    kind: StorageErrorKind,
    path: Option<PathBuf>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StorageError {
    /// Create a new storage error.
    #[must_use]
    pub fn new(kind: StorageErrorKind) -> Self {
        Self {
            kind,
            path: None,
            source: None,
        }
    }

    /// Attach path context.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Semantic error category.
    #[must_use]
    pub fn kind(&self) -> StorageErrorKind {
        self.kind
    }

    /// Path the error relates to, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Create a not found error with path.
    #[must_use]
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::new(StorageErrorKind::NotFound).with_path(path)
    }

    /// Create a storage error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => StorageErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => StorageErrorKind::PermissionDenied,
            _ => StorageErrorKind::Other,
        };
        Self::new(kind).with_source(err).with_path(path)
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "Kind: message (path: /foo/bar)"
        let kind_str = match self.kind {
            StorageErrorKind::NotFound => "Not found",
            StorageErrorKind::PermissionDenied => "Permission denied",
            StorageErrorKind::InvalidPath => "Invalid path",
            StorageErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }

        Ok(())
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}
