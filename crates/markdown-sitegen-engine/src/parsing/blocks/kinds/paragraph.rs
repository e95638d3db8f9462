/// Paragraph block type.
///
/// Paragraphs have no delimiters - they are the fallback when no other block
/// kind matches. Their lines are joined with single spaces.
pub struct Paragraph;

impl Paragraph {
    pub fn text(lines: &[&str]) -> String {
        lines
            .iter()
            .map(|line| line.trim())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
