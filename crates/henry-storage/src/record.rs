//! File records and classification.
//!
//! A [`FileRecord`] is created per discovered file, classified against the
//! root it was found under, and (for markdown files) filled with its raw bytes,
//! body and front matter. After that it is read-only.

use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::front_matter::split_front_matter;
use crate::metadata::{Metadata, MetadataError};

/// Extension gate for markdown classification (case-sensitive).
pub const MARKDOWN_EXTENSION: &str = ".md";

/// The type a file is classified as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FileKind {
    /// Anything that is not markdown.
    #[default]
    Unknown,
    /// Markdown content file.
    Markdown,
}

/// One filesystem entry under consideration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// File name (last path component).
    pub name: String,
    /// Full path as discovered.
    pub path: PathBuf,
    /// Containing directory relative to the root (e.g. `""`, `"notes/"`).
    pub sub_path: String,
    /// Classified file type.
    pub kind: FileKind,
    /// Raw file content. Only read for markdown files.
    pub data: Vec<u8>,
    /// Content after front matter removal.
    pub body: String,
    /// Front matter, present only when the file starts with a delimiter.
    pub metadata: Option<Metadata>,
    /// Filesystem modification time.
    pub modified: DateTime<Utc>,
}

impl FileRecord {
    /// Create an unclassified record.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            sub_path: String::new(),
            kind: FileKind::Unknown,
            data: Vec::new(),
            body: String::new(),
            metadata: None,
            modified: DateTime::<Utc>::default(),
        }
    }

    /// Set the modification time.
    #[must_use]
    pub fn with_modified(mut self, modified: DateTime<Utc>) -> Self {
        self.modified = modified;
        self
    }

    /// Set the raw content.
    #[must_use]
    pub fn with_data(mut self, data: impl Into<Vec<u8>>) -> Self {
        self.data = data.into();
        self
    }

    /// Classify the record against the root it was discovered under.
    pub fn classify(&mut self, root: &str) {
        let path = self.path.to_string_lossy();
        let (kind, sub_path) = classify_path(&path, &self.name, root);
        self.kind = kind;
        self.sub_path = sub_path;
    }

    /// Split the raw content into front matter and body.
    ///
    /// Does nothing for records not classified as markdown or with an empty
    /// buffer. On error the record is left unchanged.
    pub fn parse_front_matter(&mut self) -> Result<(), MetadataError> {
        if !self.is_markdown() || self.data.is_empty() {
            return Ok(());
        }
        let front_matter = split_front_matter(&self.data, &self.name)?;
        self.metadata = front_matter.metadata;
        self.body = front_matter.body;
        Ok(())
    }

    /// Whether the file carried a front matter block.
    pub fn has_metadata(&self) -> bool {
        self.metadata.is_some()
    }

    /// Whether the file was classified as markdown.
    pub fn is_markdown(&self) -> bool {
        self.kind == FileKind::Markdown
    }
}

/// Classify a path and compute its sub-path.
///
/// The sub-path is the path with the `root` prefix removed and then the file
/// `name` suffix removed, so a trailing separator is kept when one remains.
pub fn classify_path(path: &str, name: &str, root: &str) -> (FileKind, String) {
    let kind = if path.ends_with(MARKDOWN_EXTENSION) {
        FileKind::Markdown
    } else {
        FileKind::Unknown
    };

    let relative = path.strip_prefix(root).unwrap_or(path);
    let sub_path = relative.strip_suffix(name).unwrap_or(relative);

    (kind, sub_path.to_owned())
}
