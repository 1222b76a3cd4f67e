//! Markdown rendering and HTML sanitization for Henry.
//!
//! # Architecture
//!
//! - [`MarkdownRenderer`]: pulldown-cmark based markdown to HTML conversion
//! - [`Sanitizer`]: ammonia based cleanup with a user-generated-content policy
//! - [`HtmlPipeline`]: both of the above behind the [`HtmlRender`] trait
//!
//! # Example
//!
//! ```
//! use henry_renderer::{HtmlPipeline, HtmlRender};
//!
//! let html = HtmlPipeline::new().render("**Bold** text").unwrap();
//! assert_eq!(html, "<p><strong>Bold</strong> text</p>\n");
//! ```

mod pipeline;
mod renderer;
mod sanitizer;

pub use pipeline::{HtmlPipeline, HtmlRender, RenderError};
pub use renderer::MarkdownRenderer;
pub use sanitizer::Sanitizer;
