//! booktool: maintenance helpers for the book build pipeline.
//!
//! Two commands, independent of each other: `change-kernel` rewrites the
//! jupytext kernelspec in the book's MyST markdown sources (container-only),
//! and `sitemap` prints sitemap.xml for the book's table of contents.

pub mod commands;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;

use url::Url;

pub use commands::change_kernel::{ChangeKernelOptions, ChangeKernelReport, KernelUpdateFailure};
pub use commands::sitemap::SitemapOptions;
pub use domain::AppError;

use services::{JupyterBookCommand, MarkerFileContainerCheck};

/// Rewrite the jupytext kernelspec in every matching document under `root`.
///
/// Refuses to run unless `container_marker` identifies a docker container.
/// The candidate list is printed before the first rewrite; failures of the
/// external tool are reported per file and surface as an error once the
/// whole batch has been attempted.
pub fn change_kernel(
    kernel: &str,
    root: &Path,
    container_marker: &Path,
    tool: &str,
) -> Result<ChangeKernelReport, AppError> {
    let check = MarkerFileContainerCheck::new(container_marker.to_path_buf());
    let tool = JupyterBookCommand::new(tool);
    let options =
        ChangeKernelOptions { kernel: kernel.to_string(), root: root.to_path_buf() };

    let report = commands::change_kernel::execute(&check, &tool, &options)?;

    if report.failed.is_empty() {
        println!("✅ Updated kernelspec in {} file(s)", report.updated.len());
        return Ok(report);
    }

    for failure in &report.failed {
        eprintln!("Failed to update {}: {}", failure.path.display(), failure.details);
    }
    Err(AppError::KernelUpdatesFailed(report.failed.len()))
}

/// Print sitemap.xml for the table of contents at `toc` to stdout.
pub fn sitemap(toc: &Path, base_url: &str) -> Result<(), AppError> {
    let base_url = Url::parse(base_url).map_err(|e| AppError::InvalidBaseUrl {
        base: base_url.to_string(),
        details: e.to_string(),
    })?;
    let options = SitemapOptions { toc: toc.to_path_buf(), base_url };

    let xml = commands::sitemap::execute(&options)?;
    println!("{xml}");
    Ok(())
}
