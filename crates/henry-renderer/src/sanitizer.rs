//! HTML sanitization for user-generated content.

use std::borrow::Cow;

use crate::RenderError;

/// `rel` attribute added to every link.
const UGC_LINK_REL: &str = "nofollow noopener noreferrer";

/// Prefix of the `class` values kept on `<code>` (fenced code languages).
const LANGUAGE_CLASS_PREFIX: &str = "language-";

/// HTML sanitizer with a user-generated-content policy.
///
/// Built on ammonia's default allowlist (formatting, headings, lists, links,
/// images, tables, code). On top of that:
/// - Links get `rel="nofollow noopener noreferrer"`
/// - `<code class="language-*">` survives so fenced code keeps its language
///
/// Scripts, styles, event handler attributes and non-web URL schemes such as
/// `javascript:` are removed.
pub struct Sanitizer {
    builder: ammonia::Builder<'static>,
}

impl Sanitizer {
    /// Create a sanitizer with the user-generated-content policy.
    #[must_use]
    pub fn ugc() -> Self {
        let mut builder = ammonia::Builder::default();
        builder
            .link_rel(Some(UGC_LINK_REL))
            .add_tag_attributes("code", &["class"])
            .attribute_filter(|element, attribute, value| match (element, attribute) {
                ("code", "class") => language_class(value).map(Cow::Borrowed),
                _ => Some(Cow::Borrowed(value)),
            });
        Self { builder }
    }

    /// Sanitize an HTML fragment.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the sanitized document cannot be serialized.
    pub fn sanitize(&self, html: &str) -> Result<String, RenderError> {
        let document = self.builder.clean(html);
        let mut buf = Vec::with_capacity(html.len());
        document.write_to(&mut buf)?;
        Ok(String::from_utf8(buf)?)
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::ugc()
    }
}

impl std::fmt::Debug for Sanitizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sanitizer")
            .field("link_rel", &UGC_LINK_REL)
            .finish_non_exhaustive()
    }
}

/// Keep only the `language-*` token of a class attribute.
fn language_class(value: &str) -> Option<&str> {
    value.split_ascii_whitespace().find(|class| {
        class
            .strip_prefix(LANGUAGE_CLASS_PREFIX)
            .is_some_and(|lang| {
                !lang.is_empty()
                    && lang
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+'))
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sanitize(html: &str) -> String {
        Sanitizer::ugc().sanitize(html).unwrap()
    }

    #[test]
    fn test_safe_markup_unchanged() {
        let html = "<h1>Title</h1>\n<p>Some <em>text</em></p>\n";
        assert_eq!(sanitize(html), html);
    }

    #[test]
    fn test_script_removed_with_content() {
        let out = sanitize("<p>a</p><script>alert(1)</script>");
        assert_eq!(out, "<p>a</p>");
    }

    #[test]
    fn test_event_handler_removed() {
        let out = sanitize(r#"<p onclick="evil()">a</p>"#);
        assert_eq!(out, "<p>a</p>");
    }

    #[test]
    fn test_javascript_url_removed() {
        let out = sanitize(r#"<a href="javascript:alert(1)">x</a>"#);
        assert!(!out.contains("javascript"));
        assert!(out.contains(">x</a>"));
    }

    #[test]
    fn test_links_get_nofollow() {
        let out = sanitize(r#"<a href="https://example.com">x</a>"#);
        assert!(out.contains(r#"href="https://example.com""#));
        assert!(out.contains(r#"rel="nofollow noopener noreferrer""#));
    }

    #[test]
    fn test_code_language_class_kept() {
        let out = sanitize(r#"<pre><code class="language-rust">fn main() {}</code></pre>"#);
        assert_eq!(
            out,
            r#"<pre><code class="language-rust">fn main() {}</code></pre>"#
        );
    }

    #[test]
    fn test_other_classes_removed() {
        let out = sanitize(r#"<code class="evil">x</code><p class="language-rust">y</p>"#);
        assert_eq!(out, "<code>x</code><p>y</p>");
    }

    #[test]
    fn test_language_class_filter() {
        assert_eq!(language_class("language-rust"), Some("language-rust"));
        assert_eq!(language_class("foo language-c++"), Some("language-c++"));
        assert_eq!(language_class("language-"), None);
        assert_eq!(language_class("language-\"x"), None);
        assert_eq!(language_class("highlight"), None);
    }
}
