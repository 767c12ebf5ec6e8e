mod block;
mod compiler;
pub mod config;
mod error;
mod html;
mod inline;
pub mod site;
mod span;

pub use block::{BlockType, classify_block, segment_blocks};
pub use compiler::{compile_block, markdown_to_html_node};
pub use config::Config;
pub use error::{Error, Result, SiteError};
pub use html::{Attributes, HtmlNode};
pub use inline::{parse_inline_spans, split_delimiter, split_images, split_links};
pub use span::{SpanKind, TextSpan};

/// Convert markdown to the HTML fragment embedded into page templates.
pub fn render_markdown_to_html(markdown: &str) -> Result<String> {
    markdown_to_html_node(markdown)?.to_html()
}

/// Extract the page title from the leading `# ` heading line.
pub fn extract_document_title(markdown: &str) -> Result<String> {
    let first_line = markdown.split('\n').next().unwrap_or_default();
    let title = first_line.strip_prefix("# ").ok_or(Error::NoTitle)?;
    Ok(title.trim_start().trim_end_matches('\r').to_string())
}
