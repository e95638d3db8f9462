use crate::html::HtmlNode;
use crate::parsing::ParseError;

use super::types::{SpanKind, TextSpan};

/// Converts one typed span into its leaf node.
///
/// | kind   | tag    | value     | attributes           |
/// |--------|--------|-----------|----------------------|
/// | Plain  | none   | text      |                      |
/// | Bold   | `b`    | text      |                      |
/// | Italic | `i`    | text      |                      |
/// | Code   | `code` | text      |                      |
/// | Link   | `a`    | text      | `href`               |
/// | Image  | `img`  | `""`      | `src`, `alt` = text  |
///
/// Links and images without a url are rejected with [`ParseError::UnsupportedSpanKind`].
pub fn span_to_html_node(span: TextSpan) -> Result<HtmlNode, ParseError> {
    let TextSpan { text, kind, url } = span;
    let node = match kind {
        SpanKind::Plain => HtmlNode::leaf(None, Some(text), vec![])?,
        SpanKind::Bold => HtmlNode::leaf(Some("b"), Some(text), vec![])?,
        SpanKind::Italic => HtmlNode::leaf(Some("i"), Some(text), vec![])?,
        SpanKind::Code => HtmlNode::leaf(Some("code"), Some(text), vec![])?,
        SpanKind::Link => {
            let Some(url) = url else {
                return Err(ParseError::UnsupportedSpanKind { kind, text });
            };
            HtmlNode::leaf(Some("a"), Some(text), vec![("href".to_string(), url)])?
        }
        SpanKind::Image => {
            let Some(url) = url else {
                return Err(ParseError::UnsupportedSpanKind { kind, text });
            };
            HtmlNode::leaf(
                Some("img"),
                Some(String::new()),
                vec![("src".to_string(), url), ("alt".to_string(), text)],
            )?
        }
    };
    Ok(node)
}

/// Converts a span sequence into leaf nodes, preserving order.
pub fn spans_to_html_nodes(spans: Vec<TextSpan>) -> Result<Vec<HtmlNode>, ParseError> {
    spans.into_iter().map(span_to_html_node).collect()
}
