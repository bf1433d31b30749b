//! Minimal reader for the jupyter-book `_toc.yml` table of contents.
//!
//! Only the parts of the format this crate needs are modelled: the `root`
//! document, then `parts` with `chapters`, or top-level `chapters`, each
//! entry a `file` with optional nested `sections`. Entries pointing at
//! external links (`url`) or globs contribute no page. Everything else in
//! the file is ignored.

use serde::Deserialize;

use crate::domain::AppError;

/// Parsed table of contents.
#[derive(Debug, Clone, Deserialize)]
pub struct Toc {
    root: Option<String>,
    #[serde(default)]
    parts: Vec<TocPart>,
    #[serde(default)]
    chapters: Vec<TocEntry>,
}

#[derive(Debug, Clone, Deserialize)]
struct TocPart {
    #[serde(default)]
    chapters: Vec<TocEntry>,
}

#[derive(Debug, Clone, Deserialize)]
struct TocEntry {
    file: Option<String>,
    #[serde(default)]
    sections: Vec<TocEntry>,
}

impl Toc {
    /// Parse a `_toc.yml` document.
    ///
    /// A table of contents without a `root` document is rejected, matching
    /// the book toolchain's own schema.
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let toc: Toc = serde_yaml::from_str(content)?;
        if toc.root.is_none() {
            return Err(AppError::TocMissingRoot);
        }
        Ok(toc)
    }

    /// Page paths in document order: `root` first, then depth-first through
    /// parts, chapters and nested sections.
    pub fn page_paths(&self) -> Vec<String> {
        let mut pages = Vec::new();
        if let Some(root) = &self.root {
            pages.push(root.clone());
        }

        collect_pages(&self.chapters, &mut pages);
        for part in &self.parts {
            collect_pages(&part.chapters, &mut pages);
        }

        pages
    }
}

fn collect_pages(entries: &[TocEntry], pages: &mut Vec<String>) {
    for entry in entries {
        if let Some(file) = &entry.file {
            pages.push(file.clone());
        }
        collect_pages(&entry.sections, pages);
    }
}
