//! Document record and builder.
//!
//! [`DocumentBuilder`] turns one classified, front-matter-parsed
//! [`FileRecord`] into a [`Document`]. Every field is resolved with an
//! explicit precedence chain: the metadata value when present, otherwise a
//! value derived from the file itself.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use henry_renderer::{HtmlPipeline, HtmlRender, RenderError};
use henry_storage::{FileRecord, Metadata};
use serde::Serialize;

/// Final output record for one markdown file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    /// Metadata title, or the file name.
    pub title: String,
    /// Sanitized HTML body with blank lines collapsed.
    pub content: String,
    /// Markdown body as written.
    pub content_raw: String,
    /// `content` split into lines.
    pub content_paragraphs: Vec<String>,
    /// Metadata date, or the file modification time.
    pub date: DateTime<Utc>,
    /// Draft flag.
    pub draft: bool,
    /// Sanitized HTML summary.
    pub summary: String,
    /// Markdown summary from metadata (empty when derived from content).
    pub summary_raw: String,
    /// Source file path.
    pub path: PathBuf,
    /// Source directory relative to the root.
    pub sub_path: String,
}

/// Error building a single document.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// The record was not classified as markdown.
    #[error("'{}' is not a markdown file", .0.display())]
    NotMarkdown(PathBuf),
    /// Body or summary could not be rendered.
    #[error("failed to render '{file}': {source}")]
    Render {
        /// Name of the file being rendered.
        file: String,
        /// Underlying render failure.
        #[source]
        source: RenderError,
    },
}

/// Builds [`Document`]s from file records.
#[derive(Debug, Default)]
pub struct DocumentBuilder<R = HtmlPipeline> {
    renderer: R,
}

impl DocumentBuilder {
    /// Create a builder using the default render pipeline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: HtmlRender> DocumentBuilder<R> {
    /// Create a builder using a custom renderer.
    pub fn with_renderer(renderer: R) -> Self {
        Self { renderer }
    }

    /// Build a document from a markdown file record.
    ///
    /// Metadata is only consulted when the record carries a front matter
    /// block; otherwise every field falls back to its derived default.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::NotMarkdown`] for non-markdown records and
    /// [`BuildError::Render`] if rendering fails.
    pub fn build(&self, file: &FileRecord) -> Result<Document, BuildError> {
        if !file.is_markdown() {
            return Err(BuildError::NotMarkdown(file.path.clone()));
        }

        let metadata = file.metadata.as_ref();
        let render = |markdown: &str| {
            self.renderer
                .render(markdown)
                .map_err(|source| BuildError::Render {
                    file: file.name.clone(),
                    source,
                })
        };

        let content = collapse_blank_lines(&render(&file.body)?);
        let content_paragraphs = split_paragraphs(&content);

        let title = match metadata.and_then(Metadata::title) {
            Some(title) => title.to_owned(),
            None => file.name.clone(),
        };

        let date = match metadata.and_then(|m| m.date) {
            Some(date) => date,
            None => file.modified,
        };

        let draft = metadata.is_some_and(|m| m.draft);

        let (summary, summary_raw) = match metadata.and_then(Metadata::summary) {
            Some(raw) => (render(raw)?, raw.to_owned()),
            None => (
                content_paragraphs.first().cloned().unwrap_or_default(),
                String::new(),
            ),
        };

        Ok(Document {
            title,
            content,
            content_raw: file.body.clone(),
            content_paragraphs,
            date,
            draft,
            summary,
            summary_raw,
            path: file.path.clone(),
            sub_path: file.sub_path.clone(),
        })
    }
}

/// Replace each `\n\n` with `\n` in a single pass, then trim newlines from
/// both ends.
///
/// Runs of three or more newlines are only partially collapsed.
fn collapse_blank_lines(html: &str) -> String {
    html.replace("\n\n", "\n").trim_matches('\n').to_owned()
}

/// Split content into newline-free segments.
///
/// Content arrives with its surrounding newlines already trimmed, so a
/// trailing empty segment only appears for empty content.
fn split_paragraphs(content: &str) -> Vec<String> {
    content.split('\n').map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use henry_storage::FileKind;
    use pretty_assertions::assert_eq;

    /// Renderer that returns its input untouched.
    struct Echo;

    /// Renderer that fails on text containing `FAIL`.
    struct FailOnMarker;

    impl HtmlRender for FailOnMarker {
        fn render(&self, markdown: &str) -> Result<String, RenderError> {
            if markdown.contains("FAIL") {
                Err(RenderError::Io(std::io::Error::other("render failed")))
            } else {
                Ok(markdown.to_owned())
            }
        }
    }

    impl HtmlRender for Echo {
        fn render(&self, markdown: &str) -> Result<String, RenderError> {
            Ok(markdown.to_owned())
        }
    }

    fn mtime() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 6, 1, 12, 0, 0).unwrap()
    }

    fn markdown_file(name: &str, body: &str, metadata: Option<Metadata>) -> FileRecord {
        let mut file = FileRecord::new(name, format!("/data/{name}")).with_modified(mtime());
        file.kind = FileKind::Markdown;
        file.body = body.to_owned();
        file.metadata = metadata;
        file
    }

    fn echo_build(file: &FileRecord) -> Document {
        DocumentBuilder::with_renderer(Echo).build(file).unwrap()
    }

    #[test]
    fn test_title_falls_back_to_file_name_when_empty() {
        let meta = Metadata {
            title: Some(String::new()),
            ..Default::default()
        };
        let doc = echo_build(&markdown_file("post.md", "x", Some(meta)));
        assert_eq!(doc.title, "post.md");
    }

    #[test]
    fn test_title_from_metadata() {
        let meta = Metadata {
            title: Some("Hello".to_owned()),
            ..Default::default()
        };
        let doc = echo_build(&markdown_file("post.md", "x", Some(meta)));
        assert_eq!(doc.title, "Hello");
    }

    #[test]
    fn test_title_without_front_matter() {
        let doc = echo_build(&markdown_file("post.md", "x", None));
        assert_eq!(doc.title, "post.md");
    }

    #[test]
    fn test_date_from_metadata() {
        let date = Utc.with_ymd_and_hms(2019, 3, 1, 0, 0, 0).unwrap();
        let meta = Metadata {
            date: Some(date),
            ..Default::default()
        };
        let doc = echo_build(&markdown_file("post.md", "x", Some(meta)));
        assert_eq!(doc.date, date);
    }

    #[test]
    fn test_date_falls_back_to_modification_time() {
        let doc = echo_build(&markdown_file("post.md", "x", Some(Metadata::default())));
        assert_eq!(doc.date, mtime());
    }

    #[test]
    fn test_draft_resolution() {
        let doc = echo_build(&markdown_file("a.md", "x", Some(Metadata::default())));
        assert!(!doc.draft);

        let meta = Metadata {
            draft: true,
            ..Default::default()
        };
        let doc = echo_build(&markdown_file("b.md", "x", Some(meta)));
        assert!(doc.draft);

        let doc = echo_build(&markdown_file("c.md", "x", None));
        assert!(!doc.draft);
    }

    #[test]
    fn test_summary_falls_back_to_first_paragraph() {
        let meta = Metadata {
            summary: Some(String::new()),
            ..Default::default()
        };
        let doc = echo_build(&markdown_file("post.md", "First para\nSecond para", Some(meta)));
        assert_eq!(doc.content_paragraphs, vec!["First para", "Second para"]);
        assert_eq!(doc.summary, "First para");
        assert_eq!(doc.summary_raw, "");
    }

    #[test]
    fn test_summary_from_metadata_is_rendered() {
        let meta = Metadata {
            summary: Some("Short *summary*".to_owned()),
            ..Default::default()
        };
        let doc = DocumentBuilder::new()
            .build(&markdown_file("post.md", "# Body", Some(meta)))
            .unwrap();
        assert_eq!(doc.summary, "<p>Short <em>summary</em></p>\n");
        assert_eq!(doc.summary_raw, "Short *summary*");
    }

    #[test]
    fn test_summary_render_failure_is_build_error() {
        let meta = Metadata {
            summary: Some("FAIL".to_owned()),
            ..Default::default()
        };
        let err = DocumentBuilder::with_renderer(FailOnMarker)
            .build(&markdown_file("post.md", "fine body", Some(meta)))
            .unwrap_err();
        assert!(matches!(err, BuildError::Render { ref file, .. } if file == "post.md"));
    }

    #[test]
    fn test_content_rendered_and_collapsed() {
        let doc = DocumentBuilder::new()
            .build(&markdown_file("post.md", "\n# Hello\n\nWorld\n", None))
            .unwrap();
        assert_eq!(doc.content, "<h1>Hello</h1>\n<p>World</p>");
        assert_eq!(doc.content_raw, "\n# Hello\n\nWorld\n");
        assert_eq!(doc.content_paragraphs, vec!["<h1>Hello</h1>", "<p>World</p>"]);
        assert_eq!(doc.summary, "<h1>Hello</h1>");
    }

    #[test]
    fn test_content_is_sanitized() {
        let doc = DocumentBuilder::new()
            .build(&markdown_file(
                "post.md",
                "Hi <img src=x onerror=\"alert(1)\">",
                None,
            ))
            .unwrap();
        assert!(!doc.content.contains("onerror"));
    }

    #[test]
    fn test_paragraphs_never_contain_newlines() {
        let doc = echo_build(&markdown_file("post.md", "A\nB\n\n", None));
        assert_eq!(doc.content, "A\nB");
        assert_eq!(doc.content_paragraphs, vec!["A", "B"]);
        assert!(doc.content_paragraphs.iter().all(|p| !p.contains('\n')));
    }

    #[test]
    fn test_empty_body_gives_single_empty_paragraph() {
        let doc = echo_build(&markdown_file("empty.md", "", None));
        assert_eq!(doc.content, "");
        assert_eq!(doc.content_paragraphs, vec![String::new()]);
        assert_eq!(doc.summary, "");
    }

    #[test]
    fn test_build_is_deterministic() {
        let file = markdown_file("post.md", "# Hello\n\n- a\n- b\n", None);
        let builder = DocumentBuilder::new();
        assert_eq!(builder.build(&file).unwrap(), builder.build(&file).unwrap());
    }

    #[test]
    fn test_non_markdown_is_rejected() {
        let file = FileRecord::new("image.png", "/data/image.png");
        let err = DocumentBuilder::new().build(&file).unwrap_err();
        assert!(matches!(err, BuildError::NotMarkdown(_)));
        assert_eq!(err.to_string(), "'/data/image.png' is not a markdown file");
    }

    #[test]
    fn test_document_keeps_source_location() {
        let mut file = markdown_file("post.md", "x", None);
        file.sub_path = "blog/".to_owned();
        let doc = echo_build(&file);
        assert_eq!(doc.path, PathBuf::from("/data/post.md"));
        assert_eq!(doc.sub_path, "blog/");
    }

    #[test]
    fn test_collapse_blank_lines_single_pass() {
        assert_eq!(collapse_blank_lines("a\n\nb"), "a\nb");
        assert_eq!(collapse_blank_lines("a\n\n\nb"), "a\n\nb");
        assert_eq!(collapse_blank_lines("\n\na\n"), "a");
    }

    #[test]
    fn test_split_paragraphs() {
        assert_eq!(split_paragraphs("a\nb"), vec!["a", "b"]);
        assert_eq!(split_paragraphs("a\n\nb"), vec!["a", "", "b"]);
        assert_eq!(split_paragraphs("a\n"), vec!["a", ""]);
        assert_eq!(split_paragraphs(""), vec![""]);
    }

    #[test]
    fn test_document_serializes_date_as_rfc3339() {
        let doc = echo_build(&markdown_file("post.md", "x", None));
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["date"], "2021-06-01T12:00:00Z");
        assert_eq!(json["title"], "post.md");
    }
}
