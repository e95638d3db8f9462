/// A run of source lines the builder grouped into one block, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock<'a> {
    pub lines: Vec<&'a str>,
}

/// A classified block carrying the raw text its inline content is parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading {
        /// 1 to 6.
        level: u8,
        text: String,
    },
    Paragraph {
        text: String,
    },
    /// Fenced code. `text` is verbatim and never inline-parsed.
    Code {
        text: String,
    },
    Quote {
        text: String,
    },
    UnorderedList {
        items: Vec<String>,
    },
    OrderedList {
        items: Vec<String>,
    },
}
