//! Sitemap document model and renderer.
//!
//! Follows the sitemap protocol (https://www.sitemaps.org/protocol.html):
//! a `<urlset>` of `<url>` entries, each with a required `<loc>` and three
//! optional hint elements. Rendering is a pure string assembly so the output
//! formatting stays under our control; element text is emitted verbatim,
//! without XML escaping.

/// Namespace carried by the `<urlset>` root element.
pub const SITEMAP_XMLNS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// One sitemap entry. Only `loc` is required by the protocol.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SitemapUrl {
    pub loc: String,
    pub lastmod: Option<String>,
    pub changefreq: Option<String>,
    pub priority: Option<String>,
}

impl SitemapUrl {
    /// Create an entry containing only a location.
    pub fn new<S: Into<String>>(loc: S) -> Self {
        Self { loc: loc.into(), ..Self::default() }
    }

    /// Child element lines of this entry's `<url>` block, in schema order.
    fn element_lines(&self) -> Vec<String> {
        fn surround(tag: &str, value: &str) -> String {
            format!("<{tag}>{value}</{tag}>")
        }

        let mut lines = vec![surround("loc", &self.loc)];
        if let Some(lastmod) = &self.lastmod {
            lines.push(surround("lastmod", lastmod));
        }
        if let Some(changefreq) = &self.changefreq {
            lines.push(surround("changefreq", changefreq));
        }
        if let Some(priority) = &self.priority {
            lines.push(surround("priority", priority));
        }
        lines
    }
}

/// Ordered collection of sitemap entries.
///
/// Order and multiplicity are preserved exactly as pushed; no deduplication.
#[derive(Debug, Clone, Default)]
pub struct SitemapUrlSet {
    urls: Vec<SitemapUrl>,
}

impl SitemapUrlSet {
    pub fn push(&mut self, url: SitemapUrl) {
        self.urls.push(url);
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Render the sitemap document as a string, without a trailing newline.
    pub fn to_xml(&self) -> String {
        let mut lines = vec![XML_DECLARATION.to_string(), String::new()];
        lines.push(format!(r#"<urlset xmlns="{SITEMAP_XMLNS}">"#));

        for url in &self.urls {
            lines.push("  <url>".to_string());
            for element in url.element_lines() {
                lines.push(format!("    {element}"));
            }
            lines.push("  </url>".to_string());
        }

        lines.push("</urlset>".to_string());
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn empty_set_renders_bare_urlset() {
        let urlset = SitemapUrlSet::default();
        let expected = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
                        \n\
                        <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n\
                        </urlset>";
        assert_eq!(urlset.to_xml(), expected);
    }

    #[test]
    fn single_loc_block_is_indented() {
        let mut urlset = SitemapUrlSet::default();
        urlset.push(SitemapUrl::new("https://x.io/intro.html"));

        let xml = urlset.to_xml();
        assert!(xml.contains("  <url>\n    <loc>https://x.io/intro.html</loc>\n  </url>"));
    }

    #[test]
    fn optional_elements_render_in_schema_order() {
        let url = SitemapUrl {
            loc: "https://x.io/a.html".to_string(),
            lastmod: Some("2024-06-01".to_string()),
            changefreq: Some("monthly".to_string()),
            priority: Some("0.8".to_string()),
        };
        let mut urlset = SitemapUrlSet::default();
        urlset.push(url);

        let xml = urlset.to_xml();
        let loc = xml.find("<loc>").unwrap();
        let lastmod = xml.find("<lastmod>").unwrap();
        let changefreq = xml.find("<changefreq>").unwrap();
        let priority = xml.find("<priority>").unwrap();
        assert!(loc < lastmod && lastmod < changefreq && changefreq < priority);
        assert!(xml.contains("<lastmod>2024-06-01</lastmod>"));
    }

    #[test]
    fn unpopulated_optional_elements_are_omitted() {
        let mut urlset = SitemapUrlSet::default();
        urlset.push(SitemapUrl::new("https://x.io/a.html"));

        let xml = urlset.to_xml();
        assert!(!xml.contains("<lastmod>"));
        assert!(!xml.contains("<changefreq>"));
        assert!(!xml.contains("<priority>"));
    }

    proptest! {
        /// Every pushed location yields exactly one `<url>` block, in order.
        #[test]
        fn url_blocks_mirror_input_order(locs in proptest::collection::vec("[a-z0-9/._-]{1,20}", 0..16)) {
            let mut urlset = SitemapUrlSet::default();
            for loc in &locs {
                urlset.push(SitemapUrl::new(format!("https://x.io/{loc}")));
            }

            let xml = urlset.to_xml();
            prop_assert_eq!(xml.matches("<url>").count(), locs.len());
            prop_assert_eq!(xml.matches("</url>").count(), locs.len());

            let mut cursor = 0;
            for loc in &locs {
                let needle = format!("<loc>https://x.io/{loc}</loc>");
                let found = xml[cursor..].find(&needle);
                prop_assert!(found.is_some(), "missing or out of order: {}", needle);
                cursor += found.unwrap() + 1;
            }
        }
    }
}
