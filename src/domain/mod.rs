pub mod error;
pub mod frontmatter;
pub mod sitemap;
pub mod toc;

pub use error::AppError;
pub use frontmatter::{JUPYTEXT_PREFIX, MARKDOWN_EXTENSION, has_jupytext_frontmatter};
pub use sitemap::{SITEMAP_XMLNS, SitemapUrl, SitemapUrlSet};
pub use toc::Toc;
