/// The closed set of inline span kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// Text not claimed by any inline construct.
    Plain,
    Bold,
    Italic,
    /// Inline code. Its contents are never re-scanned.
    Code,
    /// `[text](url)`: `text` is the anchor text.
    Link,
    /// `![alt](url)`: `text` is the alt text.
    Image,
}

/// A typed run of inline text.
///
/// `url` is only meaningful for [`SpanKind::Link`] and [`SpanKind::Image`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub text: String,
    pub kind: SpanKind,
    pub url: Option<String>,
}

impl TextSpan {
    pub fn new(text: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            text: text.into(),
            kind,
            url: None,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Plain)
    }

    pub fn with_url(text: impl Into<String>, kind: SpanKind, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
            url: Some(url.into()),
        }
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }
}
