//! # Site Generation
//!
//! Filesystem side of the generator: copies static assets, walks the content tree,
//! and writes one templated HTML file per Markdown page.
//!
//! A page that fails to parse is logged and recorded in the [`BuildReport`]; the
//! remaining pages are still generated. Filesystem errors outside a single page
//! (unreadable content directory, missing template) abort the build.

pub mod template;

use std::fs;
use std::path::{Path, PathBuf};

use markdown_sitegen_config::Config;

use crate::models::Page;
use crate::parsing::{ParseError, extract_title, markdown_to_html};

pub use template::Template;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(String),
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

/// A page that could not be generated.
#[derive(Debug)]
pub struct PageFailure {
    pub page: Page,
    pub error: SiteError,
}

/// Outcome of a site build.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub generated: Vec<Page>,
    pub failed: Vec<PageFailure>,
    pub static_files: usize,
}

impl BuildReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Scan for markdown files in the content directory
pub fn scan_markdown_files(content_dir: &Path) -> Result<Vec<PathBuf>, SiteError> {
    if !content_dir.is_dir() {
        return Err(SiteError::InvalidContentDir(format!(
            "content directory not found: {}",
            content_dir.display()
        )));
    }

    let mut files = Vec::new();
    scan_directory_recursive(content_dir, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), SiteError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == Page::SOURCE_EXTENSION
        {
            files.push(path);
        }
    }

    Ok(())
}

/// Replaces `public_dir` with a copy of `static_dir`. Returns the number of files copied.
///
/// A missing `static_dir` leaves an empty `public_dir` behind.
pub fn copy_static(static_dir: &Path, public_dir: &Path) -> Result<usize, SiteError> {
    if public_dir.exists() {
        log::info!("Deleting public directory {}", public_dir.display());
        fs::remove_dir_all(public_dir)?;
    }
    fs::create_dir_all(public_dir)?;

    if !static_dir.is_dir() {
        log::warn!(
            "Static directory {} not found, nothing copied",
            static_dir.display()
        );
        return Ok(0);
    }

    copy_directory_recursive(static_dir, public_dir)
}

fn copy_directory_recursive(from: &Path, to: &Path) -> Result<usize, SiteError> {
    let mut copied = 0;
    for entry in fs::read_dir(from)? {
        let source = entry?.path();
        let Some(name) = source.file_name() else {
            continue;
        };
        let dest = to.join(name);

        if source.is_dir() {
            fs::create_dir_all(&dest)?;
            copied += copy_directory_recursive(&source, &dest)?;
        } else {
            log::debug!("Copying {} to {}", source.display(), dest.display());
            fs::copy(&source, &dest)?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Renders the Markdown file `from` through `template` and writes the result to `dest`.
pub fn generate_page(from: &Path, template: &Template, dest: &Path) -> Result<(), SiteError> {
    log::info!("Generating page from {} to {}", from.display(), dest.display());

    if !from.exists() {
        return Err(SiteError::NotFound(from.to_path_buf()));
    }
    let markdown = fs::read_to_string(from)?;

    let parse_error = |source| SiteError::Parse {
        path: from.to_path_buf(),
        source,
    };
    let content = markdown_to_html(&markdown).map_err(parse_error)?;
    let title = extract_title(&markdown).map_err(parse_error)?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest, template.render(&title, &content))?;
    Ok(())
}

/// Generates one page per Markdown file under `content_dir`, mirrored into `public_dir`.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template: &Template,
    public_dir: &Path,
) -> Result<BuildReport, SiteError> {
    let mut report = BuildReport::default();

    for file in scan_markdown_files(content_dir)? {
        let Some(page) = Page::from_content_file(content_dir, &file) else {
            log::warn!("Skipping {}: not under the content directory", file.display());
            continue;
        };

        let dest = page.output_in(public_dir);
        match generate_page(&file, template, &dest) {
            Ok(()) => report.generated.push(page),
            Err(error) => {
                log::warn!("Failed to generate {}: {error}", page.source_path());
                report.failed.push(PageFailure { page, error });
            }
        }
    }

    Ok(report)
}

/// Full build: copy static assets into a fresh public directory, then generate every page.
///
/// The template is loaded first so that a missing template leaves the old output in place.
pub fn build_site(config: &Config) -> Result<BuildReport, SiteError> {
    let template = Template::load(&config.template_path)?;
    let static_files = copy_static(&config.static_dir, &config.public_dir)?;
    let mut report = generate_pages_recursive(&config.content_dir, &template, &config.public_dir)?;
    report.static_files = static_files;

    log::info!(
        "Built {} page(s), {} failed, {} static file(s) copied",
        report.generated.len(),
        report.failed.len(),
        report.static_files
    );
    Ok(report)
}
