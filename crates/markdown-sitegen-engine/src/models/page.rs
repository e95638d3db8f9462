use relative_path::{RelativePath, RelativePathBuf};
use std::path::{Path, PathBuf};

/// A Markdown source page and the HTML file it is generated into.
///
/// Both paths are relative: the source to the content directory, the output
/// to the public directory. The output mirrors the source with `.html` in place of `.md`.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    source_path: RelativePathBuf,
    output_path: RelativePathBuf,
    display_name: String,
}

impl Page {
    pub const SOURCE_EXTENSION: &'static str = "md";
    pub const OUTPUT_EXTENSION: &'static str = "html";

    /// Create a new Page from a content-relative path
    pub fn new(source_path: RelativePathBuf) -> Self {
        let output_path = source_path.with_extension(Self::OUTPUT_EXTENSION);
        let display_name = source_path.file_stem().unwrap_or("Untitled").to_string();

        Self {
            source_path,
            output_path,
            display_name,
        }
    }

    /// Create from a relative path string
    pub fn from_relative_str(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }

    /// Create from a file found under `content_dir`. `None` if the file lies outside it.
    pub fn from_content_file(content_dir: &Path, file: &Path) -> Option<Self> {
        let relative = file.strip_prefix(content_dir).ok()?;
        RelativePathBuf::from_path(relative).ok().map(Self::new)
    }

    pub fn source_path(&self) -> &RelativePath {
        &self.source_path
    }

    pub fn output_path(&self) -> &RelativePath {
        &self.output_path
    }

    /// File name without the `.md` extension
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn source_in(&self, content_dir: &Path) -> PathBuf {
        self.source_path.to_path(content_dir)
    }

    pub fn output_in(&self, public_dir: &Path) -> PathBuf {
        self.output_path.to_path(public_dir)
    }
}

impl From<RelativePathBuf> for Page {
    fn from(path: RelativePathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for Page {
    fn from(path: &str) -> Self {
        Self::from_relative_str(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("index.md", "index.html", "index")]
    #[case("blog/tom.md", "blog/tom.html", "tom")]
    #[case("a/b/c/deep.page.md", "a/b/c/deep.page.html", "deep.page")]
    fn output_mirrors_source(
        #[case] source: &str,
        #[case] output: &str,
        #[case] display_name: &str,
    ) {
        let page = Page::from(source);
        assert_eq!(page.source_path().as_str(), source);
        assert_eq!(page.output_path().as_str(), output);
        assert_eq!(page.display_name(), display_name);
    }

    #[test]
    fn from_content_file_strips_content_dir() {
        let page =
            Page::from_content_file(Path::new("/site/content"), Path::new("/site/content/blog/a.md"))
                .unwrap();
        assert_eq!(page.source_path().as_str(), "blog/a.md");
        assert_eq!(
            page.output_in(Path::new("/site/public")),
            PathBuf::from("/site/public/blog/a.html")
        );
        assert_eq!(
            page.source_in(Path::new("/site/content")),
            PathBuf::from("/site/content/blog/a.md")
        );
    }

    #[test]
    fn from_content_file_outside_content_dir() {
        assert_eq!(
            Page::from_content_file(Path::new("/site/content"), Path::new("/elsewhere/a.md")),
            None
        );
    }
}
