use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for booktool operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Not running inside the book's build container.
    #[error(
        "Detected a run on the host machine. Run this command from the book's docker container."
    )]
    NotInContainer,

    /// Table of contents file missing at the expected location.
    #[error("Table of contents file (_toc.yml) does not exist: {}", .0.display())]
    TocNotFound(PathBuf),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Table of contents has no root document.
    #[error("Table of contents has no 'root' entry")]
    TocMissingRoot,

    /// Base URL could not be parsed.
    #[error("Invalid base URL '{base}': {details}")]
    InvalidBaseUrl { base: String, details: String },

    /// Page path could not be joined against the base URL.
    #[error("Cannot build URL for page '{page}': {details}")]
    UrlJoin { page: String, details: String },

    /// One kernel rewrite invocation failed.
    #[error("Kernel tool error running '{command}': {details}")]
    KernelTool { command: String, details: String },

    /// One or more kernel rewrite invocations failed across the batch.
    #[error("Kernel update failed for {0} file(s)")]
    KernelUpdatesFailed(usize),
}
