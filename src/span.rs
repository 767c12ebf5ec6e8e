use crate::error::{Error, Result};
use crate::html::HtmlNode;

/// The kind of an inline span, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl SpanKind {
    /// Whether spans of this kind carry a target URL.
    pub fn has_target(self) -> bool {
        matches!(self, SpanKind::Link | SpanKind::Image)
    }
}

/// Inline text span produced by the inline parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSpan {
    Plain(String),
    Bold(String),
    Italic(String),
    Code(String),
    Link { text: String, url: String },
    Image { alt: String, url: String },
}

impl TextSpan {
    /// Build a span from a kind known only at runtime.
    ///
    /// `target` must be present exactly when `kind` is [`SpanKind::Link`] or
    /// [`SpanKind::Image`]; any other combination is rejected.
    pub fn new(kind: SpanKind, content: impl Into<String>, target: Option<String>) -> Result<Self> {
        let content = content.into();
        let span = match (kind, target) {
            (SpanKind::Plain, None) => TextSpan::Plain(content),
            (SpanKind::Bold, None) => TextSpan::Bold(content),
            (SpanKind::Italic, None) => TextSpan::Italic(content),
            (SpanKind::Code, None) => TextSpan::Code(content),
            (SpanKind::Link, Some(url)) => TextSpan::Link { text: content, url },
            (SpanKind::Image, Some(url)) => TextSpan::Image { alt: content, url },
            (kind, _) => return Err(Error::InvalidSpanKind { kind }),
        };
        Ok(span)
    }

    pub fn plain(content: impl Into<String>) -> Self {
        TextSpan::Plain(content.into())
    }

    pub fn kind(&self) -> SpanKind {
        match self {
            TextSpan::Plain(_) => SpanKind::Plain,
            TextSpan::Bold(_) => SpanKind::Bold,
            TextSpan::Italic(_) => SpanKind::Italic,
            TextSpan::Code(_) => SpanKind::Code,
            TextSpan::Link { .. } => SpanKind::Link,
            TextSpan::Image { .. } => SpanKind::Image,
        }
    }

    /// Visible text of the span (alt text for images).
    pub fn content(&self) -> &str {
        match self {
            TextSpan::Plain(text)
            | TextSpan::Bold(text)
            | TextSpan::Italic(text)
            | TextSpan::Code(text)
            | TextSpan::Link { text, .. }
            | TextSpan::Image { alt: text, .. } => text.as_str(),
        }
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            TextSpan::Link { url, .. } | TextSpan::Image { url, .. } => Some(url.as_str()),
            _ => None,
        }
    }

    /// Convert the span into the HTML leaf that renders it.
    pub fn into_html(self) -> HtmlNode {
        match self {
            TextSpan::Plain(text) => HtmlNode::text(text),
            TextSpan::Bold(text) => HtmlNode::leaf("b", text),
            TextSpan::Italic(text) => HtmlNode::leaf("i", text),
            TextSpan::Code(text) => HtmlNode::leaf("code", text),
            TextSpan::Link { text, url } => HtmlNode::leaf("a", text).with_attr("href", url),
            // Images render as an empty element; the alt text lives in attributes.
            TextSpan::Image { alt, url } => HtmlNode::leaf("img", "")
                .with_attr("src", url)
                .with_attr("alt", alt),
        }
    }
}

/// Convert a sequence of spans into HTML leaves, preserving order.
pub fn spans_to_html(spans: Vec<TextSpan>) -> Vec<HtmlNode> {
    spans.into_iter().map(TextSpan::into_html).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn target_only_for_links_and_images() {
        let link = TextSpan::new(SpanKind::Link, "docs", Some("/docs".into())).unwrap();
        assert_eq!(link.target(), Some("/docs"));
        assert_eq!(link.content(), "docs");

        let bold = TextSpan::new(SpanKind::Bold, "loud", None).unwrap();
        assert_eq!(bold.target(), None);
        assert_eq!(bold.kind(), SpanKind::Bold);
    }

    #[test]
    fn rejects_mismatched_target() {
        assert_eq!(
            TextSpan::new(SpanKind::Link, "docs", None),
            Err(Error::InvalidSpanKind {
                kind: SpanKind::Link
            })
        );
        assert_eq!(
            TextSpan::new(SpanKind::Italic, "x", Some("y".into())),
            Err(Error::InvalidSpanKind {
                kind: SpanKind::Italic
            })
        );
    }

    #[test]
    fn plain_renders_verbatim() {
        let html = TextSpan::plain("a < b").into_html().to_html().unwrap();
        assert_eq!(html, "a < b");
    }

    #[test]
    fn formatting_tags() {
        let cases = [
            (TextSpan::Bold("x".into()), "<b>x</b>"),
            (TextSpan::Italic("x".into()), "<i>x</i>"),
            (TextSpan::Code("x".into()), "<code>x</code>"),
        ];
        for (span, expected) in cases {
            assert_eq!(span.into_html().to_html().unwrap(), expected);
        }
    }

    #[test]
    fn link_leaf() {
        let span = TextSpan::Link {
            text: "home".into(),
            url: "/index.html".into(),
        };
        assert_eq!(
            span.into_html().to_html().unwrap(),
            "<a href=/index.html>home</a>"
        );
    }

    #[test]
    fn image_leaf() {
        let span = TextSpan::Image {
            alt: "logo".into(),
            url: "logo.png".into(),
        };
        assert_eq!(
            span.into_html().to_html().unwrap(),
            "<img src=logo.png alt=logo></img>"
        );
    }
}
