use super::{ParseError, blocks::kinds::Heading};

/// The page title: text of the first line starting with `# `, marker stripped and trimmed.
pub fn extract_title(markdown: &str) -> Result<String, ParseError> {
    markdown
        .lines()
        .find_map(|line| line.strip_prefix(Heading::TITLE_PREFIX))
        .map(|title| title.trim().to_string())
        .ok_or(ParseError::MissingTitle)
}
