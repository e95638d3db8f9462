//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `` ` `` - raw zone, split before everything else
//! - **`Bold`** / **`Italic`**: `**` / `*`, bold always split first
//! - **`Link`** / **`Image`**: `[text](url)` and `![alt](url)`
//!
//! The parser calls these constants; it never hardcodes `**` or `](`.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Bold, Italic};
pub use link::{Image, Link};
