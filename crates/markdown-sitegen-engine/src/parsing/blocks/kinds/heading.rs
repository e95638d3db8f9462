use regex::Regex;
use std::sync::OnceLock;

/// ATX heading block type: `#` repeated 1-6 times, a space, then the text.
pub struct Heading;

impl Heading {
    pub const MAX_LEVEL: u8 = 6;
    /// The marker a page title line starts with.
    pub const TITLE_PREFIX: &'static str = "# ";

    /// Parses a heading line into `(level, text)`.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
        let heading_regex = HEADING_REGEX
            .get_or_init(|| Regex::new(r"^(#{1,6}) (.*)$").expect("Invalid heading regex"));

        let caps = heading_regex.captures(line)?;
        let level = u8::try_from(caps.get(1)?.as_str().len()).ok()?;
        Some((level, caps.get(2)?.as_str()))
    }

    pub fn tag(level: u8) -> &'static str {
        match level {
            1 => "h1",
            2 => "h2",
            3 => "h3",
            4 => "h4",
            5 => "h5",
            _ => "h6",
        }
    }
}
