//! # Markdown Parsing
//!
//! Converts a Markdown document into an [`HtmlNode`] tree.
//!
//! ## Pipeline
//!
//! ```text
//! markdown ─► lines ─► RawBlock ─► Block ─► TextSpan ─► HtmlNode ─► String
//!            classify   builder     open     inline     assemble    render
//! ```
//!
//! Every stage is pure and in-memory. The first error anywhere aborts the document.

pub mod blocks;
pub mod inline;
pub mod title;

use thiserror::Error;

use crate::html::{HtmlNode, NodeError};
use blocks::{Block, BlockBuilder, MarkdownLineClassifier, block_to_html_node, classify_block};
use inline::SpanKind;

pub use title::extract_title;

/// Root tag wrapping every block of a document.
pub const DOCUMENT_TAG: &str = "div";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Node(#[from] NodeError),
    #[error("Unmatched delimiter '{delimiter}' in: {text}")]
    UnmatchedDelimiter { delimiter: String, text: String },
    #[error("Ordered list item numbered {found}, expected {expected}")]
    InvalidListNumbering { expected: u64, found: u64 },
    #[error("Cannot convert {kind:?} span without a url: {text}")]
    UnsupportedSpanKind { kind: SpanKind, text: String },
    #[error("No '# ' title line found")]
    MissingTitle,
}

/// Splits a document into classified blocks, in document order.
pub fn parse_blocks(markdown: &str) -> Result<Vec<Block>, ParseError> {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for line in markdown.lines() {
        let lc = classifier.classify(line);
        builder.push(&lc);
    }

    builder
        .finish()
        .iter()
        .map(|raw| {
            let block = classify_block(raw)?;
            log::debug!("Classified {} line(s) as {:?}", raw.lines.len(), block);
            Ok(block)
        })
        .collect()
}

/// Parses a whole document into a single `div` root holding one node per block.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode, ParseError> {
    let children = parse_blocks(markdown)?
        .into_iter()
        .map(block_to_html_node)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::container(Some(DOCUMENT_TAG), children, vec![])?)
}

/// Convenience: parse and render in one step.
pub fn markdown_to_html(markdown: &str) -> Result<String, ParseError> {
    Ok(markdown_to_html_node(markdown)?.render())
}
