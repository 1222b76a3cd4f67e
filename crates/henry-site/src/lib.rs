//! Document building and collection assembly for Henry.
//!
//! Turns discovered [`FileRecord`](henry_storage::FileRecord)s into
//! [`Document`]s ready for templating or publishing:
//!
//! - [`DocumentBuilder`]: one record to one document (render, sanitize,
//!   resolve title/date/draft/summary)
//! - [`assemble`]: a batch of records to documents, skipping failures
//! - [`load_documents`]: discovery plus assembly in one call
//!
//! # Example
//!
//! ```ignore
//! use henry_site::{DocumentBuilder, load_documents};
//! use henry_storage_fs::FsSource;
//!
//! let report = load_documents(&FsSource::new("data/"), &DocumentBuilder::new())?;
//! for doc in &report.documents {
//!     println!("{} ({})", doc.title, doc.date);
//! }
//! ```

mod assembler;
mod document;

pub use assembler::{BuildReport, assemble, load_documents};
pub use document::{BuildError, Document, DocumentBuilder};
