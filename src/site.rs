//! Static site generation on top of the Markdown renderer.
//!
//! Every `.md` file under the content directory becomes an `.html` page in
//! the public directory, with static assets copied alongside.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::config::{Config, TemplateConfig};
use crate::error::SiteError;
use crate::{extract_document_title, render_markdown_to_html};

/// Render one Markdown page into `template` and return the full page.
pub fn render_page(
    markdown: &str,
    template: &str,
    placeholders: &TemplateConfig,
) -> crate::Result<String> {
    let html = render_markdown_to_html(markdown)?;
    let title = extract_document_title(markdown)?;
    Ok(placeholders.apply(template, &title, &html))
}

/// Generate a single page from a Markdown file.
pub fn generate_page(
    from: &Path,
    template_path: &Path,
    dest: &Path,
    placeholders: &TemplateConfig,
) -> Result<(), SiteError> {
    let template = fs::read_to_string(template_path).map_err(SiteError::io(template_path))?;
    write_page(from, &template, dest, placeholders)
}

/// Generate a page for every Markdown file under `content_dir`.
///
/// Returns the number of pages written.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    placeholders: &TemplateConfig,
) -> Result<usize, SiteError> {
    let template = fs::read_to_string(template_path).map_err(SiteError::io(template_path))?;

    let mut pages = 0;
    for entry in WalkDir::new(content_dir).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().is_none_or(|ext| ext != "md") {
            continue;
        }
        let Ok(relative) = path.strip_prefix(content_dir) else {
            continue;
        };
        let dest = dest_dir.join(relative).with_extension("html");
        write_page(path, &template, &dest, placeholders)?;
        pages += 1;
    }
    Ok(pages)
}

fn write_page(
    from: &Path,
    template: &str,
    dest: &Path,
    placeholders: &TemplateConfig,
) -> Result<(), SiteError> {
    tracing::info!(from = %from.display(), dest = %dest.display(), "Generating page");

    let markdown = fs::read_to_string(from)
        .map_err(SiteError::io(from))?
        .replace("\r\n", "\n");
    let page = render_page(&markdown, template, placeholders).map_err(|source| {
        SiteError::Render {
            path: from.to_path_buf(),
            source,
        }
    })?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(SiteError::io(parent))?;
    }
    fs::write(dest, page).map_err(SiteError::io(dest))
}

/// Replace `dest` with a recursive copy of `src`.
pub fn copy_static(src: &Path, dest: &Path) -> Result<(), SiteError> {
    if dest.exists() {
        tracing::debug!(dest = %dest.display(), "Removing previous output");
        fs::remove_dir_all(dest).map_err(SiteError::io(dest))?;
    }
    fs::create_dir_all(dest).map_err(SiteError::io(dest))?;

    for entry in WalkDir::new(src).min_depth(1) {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dest.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(SiteError::io(&target))?;
        } else {
            tracing::debug!(from = %entry.path().display(), to = %target.display(), "Copying");
            fs::copy(entry.path(), &target).map_err(SiteError::io(&target))?;
        }
    }
    tracing::info!(from = %src.display(), to = %dest.display(), "Copied static files");
    Ok(())
}

/// Build the whole site described by `config`.
///
/// Returns the number of pages generated.
pub fn build_site(config: &Config) -> Result<usize, SiteError> {
    let site = &config.site;
    copy_static(&site.static_dir, &site.public)?;
    let pages =
        generate_pages_recursive(&site.content, &site.template, &site.public, &config.template)?;
    tracing::info!(pages, public = %site.public.display(), "Site built");
    Ok(pages)
}
