//! Detection of MyST markdown sources carrying a jupytext front-matter block.

/// Content prefix marking a document whose front matter is managed by jupytext.
pub const JUPYTEXT_PREFIX: &str = "---\njupytext";

/// File extension of the book's markdown sources.
pub const MARKDOWN_EXTENSION: &str = "md";

/// Whether the document content opens with a jupytext front-matter block.
///
/// Only the literal prefix is inspected; the YAML inside the block is the
/// book toolchain's concern.
pub fn has_jupytext_frontmatter(content: &str) -> bool {
    content.starts_with(JUPYTEXT_PREFIX)
}
