/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineClass<'a> {
    /// The line without its terminator.
    pub text: &'a str,
    /// Whether the line is blank (whitespace only).
    pub is_blank: bool,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`] containing local facts.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let text = line.trim_end_matches(['\r', '\n']);
        LineClass {
            text,
            is_blank: text.trim().is_empty(),
        }
    }
}
