use std::path::Path;
use std::process::Command;

use crate::domain::AppError;
use crate::ports::KernelTool;

/// Default program performing the kernelspec rewrite.
pub const JUPYTER_BOOK_PROGRAM: &str = "jupyter-book";

/// Kernel rewrites delegated to `<program> myst init --kernel <id> <path>`.
#[derive(Debug, Clone)]
pub struct JupyterBookCommand {
    program: String,
}

impl JupyterBookCommand {
    /// Adapter invoking a custom program (used by tests and non-standard installs).
    pub fn new<S: Into<String>>(program: S) -> Self {
        Self { program: program.into() }
    }

    fn run(&self, args: &[&str], document: &Path) -> Result<(), AppError> {
        let describe = || {
            format!("{} {} {}", self.program, args.join(" "), document.display())
        };

        let output = Command::new(&self.program)
            .args(args)
            .arg(document)
            .output()
            .map_err(|e| AppError::KernelTool { command: describe(), details: e.to_string() })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::KernelTool {
                command: describe(),
                details: if stderr.is_empty() {
                    format!("exited with {}", output.status)
                } else {
                    stderr
                },
            });
        }

        Ok(())
    }
}

impl Default for JupyterBookCommand {
    fn default() -> Self {
        Self::new(JUPYTER_BOOK_PROGRAM)
    }
}

impl KernelTool for JupyterBookCommand {
    fn init_kernel(&self, kernel: &str, document: &Path) -> Result<(), AppError> {
        self.run(&["myst", "init", "--kernel", kernel], document)
    }
}
