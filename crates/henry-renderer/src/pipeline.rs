//! Render-then-sanitize pipeline.

use crate::renderer::MarkdownRenderer;
use crate::sanitizer::Sanitizer;

/// Error produced while turning markdown into safe HTML.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Sanitized output could not be serialized.
    #[error("failed to serialize sanitized HTML: {0}")]
    Io(#[from] std::io::Error),
    /// Sanitized output is not valid UTF-8.
    #[error("sanitized HTML is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Converts markdown text into sanitized HTML.
///
/// Implementations must be pure: rendering the same input twice yields the
/// same output.
pub trait HtmlRender {
    /// Render markdown and sanitize the result.
    fn render(&self, markdown: &str) -> Result<String, RenderError>;
}

/// Default [`HtmlRender`] implementation: [`MarkdownRenderer`] followed by
/// [`Sanitizer`].
#[derive(Debug, Default)]
pub struct HtmlPipeline {
    renderer: MarkdownRenderer,
    sanitizer: Sanitizer,
}

impl HtmlPipeline {
    /// Create a pipeline with GFM enabled and the UGC sanitization policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the markdown renderer.
    #[must_use]
    pub fn with_renderer(mut self, renderer: MarkdownRenderer) -> Self {
        self.renderer = renderer;
        self
    }
}

impl HtmlRender for HtmlPipeline {
    fn render(&self, markdown: &str) -> Result<String, RenderError> {
        let raw = self.renderer.render(markdown);
        self.sanitizer.sanitize(&raw)
    }
}
