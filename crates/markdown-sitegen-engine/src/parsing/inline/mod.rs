//! # Inline Parsing
//!
//! Splits a block's raw text into typed [`TextSpan`]s, then converts each span
//! into a leaf [`HtmlNode`](crate::html::HtmlNode).
//!
//! ## Architecture
//!
//! Inline parsing is a sequence of independent passes over a span list. Each pass
//! only looks at `Plain` spans; anything already typed is passed through untouched.
//! That is the whole nesting policy: text inside a typed span is never re-interpreted.
//!
//! ## Modules
//!
//! - **`types`**: `TextSpan` and the closed `SpanKind` enum
//! - **`kinds`**: Delimiter constants owned per construct (CodeSpan, Bold, Italic, Link, Image)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning of link/image syntax
//! - **`parser`**: `text_to_spans()` and the individual `split_spans_*` passes
//! - **`convert`**: `span_to_html_node()`, the total span-to-leaf mapping

pub mod convert;
pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use convert::{span_to_html_node, spans_to_html_nodes};
pub use parser::{
    extract_markdown_images, extract_markdown_links, split_spans_delimiter, split_spans_image,
    split_spans_link, text_to_spans,
};
pub use types::{SpanKind, TextSpan};
