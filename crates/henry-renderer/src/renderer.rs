//! Markdown to HTML rendering.

use pulldown_cmark::{Options, Parser, html};

/// Markdown renderer producing raw (unsanitized) HTML.
///
/// Raw HTML embedded in the markdown is passed through untouched, so the
/// output must go through a [`Sanitizer`](crate::Sanitizer) before it is
/// shown to anyone.
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    gfm: bool,
}

impl MarkdownRenderer {
    /// Create a new renderer with GFM enabled by default.
    #[must_use]
    pub fn new() -> Self {
        Self { gfm: true }
    }

    /// Enable or disable GitHub Flavored Markdown features.
    ///
    /// GFM is enabled by default. When enabled, the parser supports:
    /// - Tables
    /// - Strikethrough (`~~text~~`)
    /// - Task lists (`- [ ] item`)
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    /// Get parser options based on GFM configuration.
    #[must_use]
    pub fn parser_options(&self) -> Options {
        if self.gfm {
            Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_GFM
        } else {
            Options::empty()
        }
    }

    /// Render markdown text to HTML.
    #[must_use]
    pub fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.parser_options());
        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(markdown: &str) -> String {
        MarkdownRenderer::new().render(markdown)
    }

    #[test]
    fn test_basic_paragraph() {
        assert_eq!(render("Hello, world!"), "<p>Hello, world!</p>\n");
    }

    #[test]
    fn test_heading_and_paragraph() {
        assert_eq!(
            render("# Title\n\nSome text"),
            "<h1>Title</h1>\n<p>Some text</p>\n"
        );
    }

    #[test]
    fn test_emphasis_and_code_span() {
        assert_eq!(
            render("*em* **strong** `code`"),
            "<p><em>em</em> <strong>strong</strong> <code>code</code></p>\n"
        );
    }

    #[test]
    fn test_list() {
        assert_eq!(render("- a\n- b"), "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n");
    }

    #[test]
    fn test_link() {
        assert_eq!(
            render("[site](https://example.com)"),
            "<p><a href=\"https://example.com\">site</a></p>\n"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render(""), "");
    }

    #[test]
    fn test_strikethrough_requires_gfm() {
        assert!(render("~~gone~~").contains("<del>gone</del>"));
        let plain = MarkdownRenderer::new().with_gfm(false).render("~~gone~~");
        assert!(!plain.contains("<del>"));
    }

    #[test]
    fn test_table_requires_gfm() {
        let markdown = "| a | b |\n|---|---|\n| 1 | 2 |";
        assert!(render(markdown).contains("<table>"));
        let plain = MarkdownRenderer::new().with_gfm(false).render(markdown);
        assert!(!plain.contains("<table>"));
    }

    #[test]
    fn test_raw_html_passes_through() {
        assert!(render("<script>alert(1)</script>").contains("<script>"));
    }
}
