//! File records and storage abstraction for Henry.
//!
//! This crate provides the data model shared by the pipeline:
//!
//! - [`FileRecord`] and [`FileKind`]: one discovered file, classified against
//!   its root with [`classify_path`]
//! - [`Metadata`]: TOML front matter, split from the body by
//!   [`split_front_matter`]
//! - [`FileSource`]: discovery trait implemented by storage backends
//!
//! # Example
//!
//! ```
//! use henry_storage::FileRecord;
//!
//! let mut record = FileRecord::new("post.md", "/data/blog/post.md")
//!     .with_data("---\ntitle = \"Hello\"\n---\nBody");
//! record.classify("/data/");
//! record.parse_front_matter()?;
//!
//! assert!(record.is_markdown());
//! assert_eq!(record.sub_path, "blog/");
//! assert_eq!(record.body, "\nBody");
//! # Ok::<(), henry_storage::MetadataError>(())
//! ```

mod front_matter;
mod metadata;
mod record;
mod storage;

pub use front_matter::{DELIMITER, FrontMatter, split_front_matter};
pub use metadata::{Metadata, MetadataError};
pub use record::{FileKind, FileRecord, MARKDOWN_EXTENSION, classify_path};
pub use storage::{Discovery, FileSource, SkippedFile, StorageError, StorageErrorKind};
