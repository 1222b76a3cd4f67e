//! Document collection assembly.
//!
//! Applies the [`DocumentBuilder`] to every markdown record. A file that
//! fails to build is logged and left out; the rest of the batch continues.

use henry_renderer::HtmlRender;
use henry_storage::{FileRecord, FileSource, SkippedFile, StorageError};

use crate::document::{Document, DocumentBuilder};

/// Result of assembling a document collection.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Built documents, in input order.
    pub documents: Vec<Document>,
    /// Files that were dropped, with the reason.
    pub skipped: Vec<SkippedFile>,
}

/// Build documents for every markdown record in `files`.
///
/// Non-markdown records are passed over. Output order follows input order
/// among successful builds.
pub fn assemble<'a, R: HtmlRender>(
    builder: &DocumentBuilder<R>,
    files: impl IntoIterator<Item = &'a FileRecord>,
) -> BuildReport {
    let mut report = BuildReport::default();

    for file in files {
        if !file.is_markdown() {
            tracing::debug!(path = %file.path.display(), "Not markdown, skipping");
            continue;
        }

        match builder.build(file) {
            Ok(document) => report.documents.push(document),
            Err(e) => {
                tracing::warn!(file = %file.name, error = %e, "Failed to build document");
                report.skipped.push(SkippedFile::new(&file.path, e));
            }
        }
    }

    report
}

/// Discover files from `source` and assemble their documents.
///
/// Files skipped during discovery are reported ahead of those skipped while
/// building.
///
/// # Errors
///
/// Returns a [`StorageError`] if discovery fails as a whole.
pub fn load_documents<R: HtmlRender>(
    source: &dyn FileSource,
    builder: &DocumentBuilder<R>,
) -> Result<BuildReport, StorageError> {
    let discovery = source.discover()?;
    let mut report = assemble(builder, &discovery.files);

    let mut skipped = discovery.skipped;
    skipped.append(&mut report.skipped);
    report.skipped = skipped;

    tracing::info!(
        documents = report.documents.len(),
        skipped = report.skipped.len(),
        "Documents assembled"
    );

    Ok(report)
}
