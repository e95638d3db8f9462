pub mod html;
pub mod models;
pub mod parsing;
pub mod site;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use html::{Attributes, HtmlNode, NodeError};
pub use models::Page;
pub use parsing::{
    ParseError, extract_title, markdown_to_html, markdown_to_html_node, parse_blocks,
};
pub use site::{
    BuildReport, PageFailure, SiteError, Template, build_site, copy_static, generate_page,
    generate_pages_recursive, scan_markdown_files,
};
