use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, MARKDOWN_EXTENSION, has_jupytext_frontmatter};

/// Collect markdown documents under `root` that carry a jupytext
/// front-matter block.
///
/// Directory entries are visited in name order so the candidate list is
/// deterministic for a fixed tree. Any unreadable directory or file aborts
/// the scan.
pub fn collect_update_candidates(root: &Path) -> Result<Vec<PathBuf>, AppError> {
    let mut candidates = Vec::new();
    collect_in_dir(root, &mut candidates)?;
    Ok(candidates)
}

fn collect_in_dir(dir: &Path, candidates: &mut Vec<PathBuf>) -> Result<(), AppError> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        entries.push(entry?.path());
    }
    entries.sort();

    for path in entries {
        if path.is_dir() {
            collect_in_dir(&path, candidates)?;
            continue;
        }

        if path.extension().and_then(|ext| ext.to_str()) != Some(MARKDOWN_EXTENSION) {
            continue;
        }

        let content = fs::read_to_string(&path)?;
        if has_jupytext_frontmatter(&content) {
            candidates.push(path);
        }
    }

    Ok(())
}
