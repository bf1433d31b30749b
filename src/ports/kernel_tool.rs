use std::path::Path;

use crate::domain::AppError;

/// External tool rewriting a document's embedded kernel metadata in place.
pub trait KernelTool {
    /// Initialize the document's kernelspec to the given jupyter kernel.
    fn init_kernel(&self, kernel: &str, document: &Path) -> Result<(), AppError>;
}
