use regex::Regex;
use std::sync::OnceLock;

/// Unordered list: every line starts with `- ` or `* `.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKERS: [&'static str; 2] = ["- ", "* "];

    /// The item text of `line`, or `None` if it has no bullet marker.
    pub fn item(line: &str) -> Option<&str> {
        Self::MARKERS
            .iter()
            .find_map(|marker| line.strip_prefix(marker))
    }
}

/// Ordered list: lines start with `1. `, `2. `, ... in sequence.
pub struct OrderedList;

impl OrderedList {
    pub const FIRST_NUMBER: u64 = 1;

    /// Parses `N. text` into `(N, text)`.
    pub fn item(line: &str) -> Option<(u64, &str)> {
        static ORDERED_ITEM_REGEX: OnceLock<Regex> = OnceLock::new();
        let ordered_item_regex = ORDERED_ITEM_REGEX
            .get_or_init(|| Regex::new(r"^(\d+)\. (.*)$").expect("Invalid ordered list regex"));

        let caps = ordered_item_regex.captures(line)?;
        let number = caps.get(1)?.as_str().parse().ok()?;
        Some((number, caps.get(2)?.as_str()))
    }
}
