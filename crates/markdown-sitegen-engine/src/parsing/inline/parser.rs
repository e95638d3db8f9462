use crate::parsing::ParseError;

use super::{
    cursor::Cursor,
    kinds::{Bold, CodeSpan, Image, Italic, Link},
    types::{SpanKind, TextSpan},
};

/// Runs the full inline pipeline over one block's text.
///
/// # Pass Order
/// 1. Code spans (raw zones: nothing inside them is re-scanned)
/// 2. Images, then links (`![alt](url)` contains `[alt](url)`)
/// 3. Bold, then italic (`*` is a prefix of `**`)
///
/// Typed spans are never revisited by a later pass, which is what keeps the
/// passes from interfering with each other.
pub fn text_to_spans(text: &str) -> Result<Vec<TextSpan>, ParseError> {
    let spans = vec![TextSpan::plain(text)];
    let spans = split_spans_delimiter(spans, CodeSpan::DELIMITER, SpanKind::Code)?;
    let spans = split_spans_image(spans);
    let spans = split_spans_link(spans);
    let spans = split_spans_delimiter(spans, Bold::DELIMITER, SpanKind::Bold)?;
    split_spans_delimiter(spans, Italic::DELIMITER, SpanKind::Italic)
}

/// Splits every `Plain` span on `delimiter`, typing the enclosed runs as `kind`.
///
/// Segments alternate outside/inside: even segments stay `Plain` (dropped when empty),
/// odd segments become `kind` (kept even when empty). An even segment count means the
/// last delimiter was never closed.
///
/// Non-`Plain` spans and empty `Plain` spans pass through unchanged.
pub fn split_spans_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>, ParseError> {
    debug_assert!(!delimiter.is_empty(), "delimiter must not be empty");

    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() || span.text.is_empty() {
            out.push(span);
            continue;
        }

        let segments: Vec<&str> = span.text.split(delimiter).collect();
        if segments.len() % 2 == 0 {
            return Err(ParseError::UnmatchedDelimiter {
                delimiter: delimiter.to_string(),
                text: span.text.clone(),
            });
        }

        for (i, segment) in segments.into_iter().enumerate() {
            if i % 2 == 0 {
                if !segment.is_empty() {
                    out.push(TextSpan::plain(segment));
                }
            } else {
                out.push(TextSpan::new(segment, kind));
            }
        }
    }
    Ok(out)
}

/// Extracts `![alt](url)` references from every `Plain` span as `Image` spans.
pub fn split_spans_image(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_spans_references(spans, SpanKind::Image, scan_images)
}

/// Extracts `[text](url)` references from every `Plain` span as `Link` spans.
///
/// Image syntax is skipped rather than read as a link with a stray `!`.
pub fn split_spans_link(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_spans_references(spans, SpanKind::Link, scan_links)
}

/// Lists the `(alt, url)` pair of every image in `text`, in source order.
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    scan_images(text).into_iter().map(Reference::into_pair).collect()
}

/// Lists the `(text, url)` pair of every link in `text`, in source order.
///
/// Images are not reported.
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    scan_links(text).into_iter().map(Reference::into_pair).collect()
}

/// A `[text](url)`-shaped reference found in a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Reference<'a> {
    /// Byte offset of the first byte (`[` or `!`).
    start: usize,
    /// Byte offset just past the closing `)`.
    end: usize,
    text: &'a str,
    url: &'a str,
}

impl Reference<'_> {
    fn into_pair(self) -> (String, String) {
        (self.text.to_string(), self.url.to_string())
    }
}

fn split_spans_references(
    spans: Vec<TextSpan>,
    kind: SpanKind,
    scan: fn(&str) -> Vec<Reference<'_>>,
) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }
        match split_references(&span.text, kind, scan) {
            Some(pieces) => out.extend(pieces),
            None => out.push(span),
        }
    }
    out
}

/// Returns `None` when `text` holds no references.
fn split_references(
    text: &str,
    kind: SpanKind,
    scan: fn(&str) -> Vec<Reference<'_>>,
) -> Option<Vec<TextSpan>> {
    let refs = scan(text);
    if refs.is_empty() {
        return None;
    }

    let mut out = vec![];
    let mut last = 0;
    for r in refs {
        if r.start > last {
            out.push(TextSpan::plain(&text[last..r.start]));
        }
        out.push(TextSpan::with_url(r.text, kind, r.url));
        last = r.end;
    }
    if last < text.len() {
        out.push(TextSpan::plain(&text[last..]));
    }
    Some(out)
}

fn scan_images(s: &str) -> Vec<Reference<'_>> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    while !cur.eof() {
        if let Some(r) = try_parse_image(&mut cur) {
            out.push(r);
            continue;
        }
        cur.bump();
    }
    out
}

fn scan_links(s: &str) -> Vec<Reference<'_>> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    while !cur.eof() {
        // Images claim their brackets before a link can.
        if try_parse_image(&mut cur).is_some() {
            continue;
        }
        if let Some(r) = try_parse_reference(&mut cur) {
            out.push(r);
            continue;
        }
        cur.bump();
    }
    out
}

/// Attempts to parse `![alt](url)` at the current position.
///
/// On failure, cursor position is restored.
fn try_parse_image<'a>(cur: &mut Cursor<'a>) -> Option<Reference<'a>> {
    if cur.peek() != Some(Image::BANG) || cur.peek_at(1) != Some(Link::TEXT_OPEN) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // !
    match try_parse_reference(cur) {
        Some(r) => Some(Reference { start, ..r }),
        None => {
            *cur = saved;
            None
        }
    }
}

/// Attempts to parse `[text](url)` at the current position.
///
/// On failure, cursor position is restored.
fn try_parse_reference<'a>(cur: &mut Cursor<'a>) -> Option<Reference<'a>> {
    if cur.peek() != Some(Link::TEXT_OPEN) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // [
    let text_start = cur.pos();
    cur.bump_until(&[Link::TEXT_OPEN, Link::TEXT_CLOSE]);
    let text_end = cur.pos();

    if cur.peek() != Some(Link::TEXT_CLOSE) || cur.peek_at(1) != Some(Link::URL_OPEN) {
        *cur = saved;
        return None;
    }
    cur.bump(); // ]
    cur.bump(); // (
    let url_start = cur.pos();
    cur.bump_until(&[Link::URL_OPEN, Link::URL_CLOSE]);
    let url_end = cur.pos();

    if cur.peek() != Some(Link::URL_CLOSE) {
        *cur = saved;
        return None;
    }
    cur.bump(); // )

    Some(Reference {
        start,
        end: cur.pos(),
        text: cur.slice(text_start, text_end),
        url: cur.slice(url_start, url_end),
    })
}
