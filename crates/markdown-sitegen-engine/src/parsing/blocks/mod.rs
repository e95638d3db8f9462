//! # Block Parsing
//!
//! Three-phase block parsing over the document's lines.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    containing local facts (text, blank status)
//!
//! 2. **Block Grouping** (`builder`): A `BlockBuilder` groups lines into `RawBlock`s,
//!    splitting on runs of blank lines
//!
//! 3. **Block Classification** (`open`): `classify_block` turns each `RawBlock` into a
//!    `Block` variant, which `assemble` converts into a container node
//!
//! ## Modules
//!
//! - **`types`**: `RawBlock` and the `Block` enum
//! - **`kinds`**: Block-specific types with owned delimiters (Heading, BlockQuote, lists,
//!   CodeFence, Paragraph)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` groups lines between blank-line runs
//! - **`open`**: `classify_block` precedence dispatch
//! - **`assemble`**: `block_to_html_node`
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no inline parsing inside
//! - Every block container has at least one child (empty text still yields one
//!   empty text leaf)

pub mod assemble;
pub mod builder;
pub mod classify;
pub mod kinds;
pub mod open;
pub mod types;

pub use assemble::block_to_html_node;
pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use open::classify_block;
pub use types::{Block, RawBlock};
