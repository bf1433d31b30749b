//! Change-kernel command: rewrite the jupytext kernelspec in MyST markdown
//! sources of the book checkout.

use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::{ContainerCheck, KernelTool};
use crate::services::collect_update_candidates;

/// Options for the change-kernel command.
#[derive(Debug, Clone)]
pub struct ChangeKernelOptions {
    /// Jupyter kernelspec name to write into each document.
    pub kernel: String,
    /// Root of the book checkout to scan.
    pub root: PathBuf,
}

/// One failed rewrite invocation.
#[derive(Debug)]
pub struct KernelUpdateFailure {
    /// Document the rewrite was attempted on.
    pub path: PathBuf,
    /// Tool error description.
    pub details: String,
}

/// Result of the change-kernel command.
#[derive(Debug, Default)]
pub struct ChangeKernelReport {
    /// Documents successfully rewritten, in scan order.
    pub updated: Vec<PathBuf>,
    /// Documents the tool failed on, in scan order.
    pub failed: Vec<KernelUpdateFailure>,
}

/// Execute the change-kernel command.
///
/// Hard precondition: the container check must pass; otherwise nothing is
/// enumerated or mutated. The full candidate list is printed before the
/// first rewrite. A failing invocation does not stop the batch; failures
/// are collected into the report.
pub fn execute(
    check: &dyn ContainerCheck,
    tool: &dyn KernelTool,
    options: &ChangeKernelOptions,
) -> Result<ChangeKernelReport, AppError> {
    if !check.inside_container() {
        return Err(AppError::NotInContainer);
    }

    let candidates = collect_update_candidates(&options.root)?;

    println!("The following files will be updated:");
    for path in &candidates {
        println!("  {}", path.display());
    }

    let mut report = ChangeKernelReport::default();
    for path in candidates {
        match tool.init_kernel(&options.kernel, &path) {
            Ok(()) => report.updated.push(path),
            Err(err) => {
                report.failed.push(KernelUpdateFailure { path, details: err.to_string() });
            }
        }
    }

    Ok(report)
}
