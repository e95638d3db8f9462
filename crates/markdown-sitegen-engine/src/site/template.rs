use std::fs;
use std::path::Path;

use super::SiteError;

/// An HTML page skeleton with `{{ Title }}` and `{{ Content }}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    text: String,
}

impl Template {
    pub const TITLE_PLACEHOLDER: &'static str = "{{ Title }}";
    pub const CONTENT_PLACEHOLDER: &'static str = "{{ Content }}";

    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn load(path: &Path) -> Result<Self, SiteError> {
        if !path.exists() {
            return Err(SiteError::NotFound(path.to_path_buf()));
        }
        Ok(Self::new(fs::read_to_string(path)?))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Substitutes every occurrence of both placeholders. The title goes in first.
    pub fn render(&self, title: &str, content: &str) -> String {
        self.text
            .replace(Self::TITLE_PLACEHOLDER, title)
            .replace(Self::CONTENT_PLACEHOLDER, content)
    }
}
