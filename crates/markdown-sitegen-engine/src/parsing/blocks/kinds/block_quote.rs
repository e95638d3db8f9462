/// Blockquote block type with owned delimiter constant.
///
/// All blockquote syntax knowledge lives here, not scattered in classifier code.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Whether `line` belongs to a quote block: it must start with `>` itself.
    pub fn is_quote_line(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }

    /// The line's text with every quote prefix removed and whitespace trimmed.
    pub fn content(line: &str) -> &str {
        line[Self::strip_prefixes(line)..].trim()
    }

    /// Byte offset into `s` where content begins after all blockquote prefixes.
    ///
    /// Handles various forms: `> text`, `>> nested`, `> > spaced nested`.
    /// Returns 0 when `s` has no prefix.
    pub fn strip_prefixes(s: &str) -> usize {
        let b = s.as_bytes();
        let mut i = 0usize;

        loop {
            while i < b.len() && b[i] == b' ' {
                i += 1;
            }
            if i < b.len() && b[i] == (Self::PREFIX as u8) {
                i += 1;
                if i < b.len() && b[i] == b' ' {
                    i += 1;
                }
            } else {
                break;
            }
        }
        i
    }
}
