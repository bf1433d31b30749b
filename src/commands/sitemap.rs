//! Sitemap command: render sitemap.xml for the book's table of contents.

use std::fs;
use std::path::PathBuf;

use url::Url;

use crate::domain::{AppError, SitemapUrl, SitemapUrlSet, Toc};

/// Options for the sitemap command.
#[derive(Debug, Clone)]
pub struct SitemapOptions {
    /// Path to the book's `_toc.yml`.
    pub toc: PathBuf,
    /// URL the book's index page is hosted at.
    pub base_url: Url,
}

/// Execute the sitemap command, returning the rendered document.
///
/// Every page of the table of contents becomes one `<url>` entry, in
/// document order: the page path is joined against the base URL with a
/// `.html` suffix appended.
pub fn execute(options: &SitemapOptions) -> Result<String, AppError> {
    if !options.toc.is_file() {
        return Err(AppError::TocNotFound(options.toc.clone()));
    }

    let content = fs::read_to_string(&options.toc)?;
    let toc = Toc::parse(&content)?;

    let mut urlset = SitemapUrlSet::default();
    for page in toc.page_paths() {
        let page_html = format!("{page}.html");
        let loc = options.base_url.join(&page_html).map_err(|e| AppError::UrlJoin {
            page,
            details: e.to_string(),
        })?;
        urlset.push(SitemapUrl::new(loc.as_str()));
    }

    Ok(urlset.to_xml())
}
