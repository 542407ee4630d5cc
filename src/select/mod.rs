pub mod errors;

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::lang::LanguageRegistry;
use errors::SelectError;

/// Absolute paths of every file selected for one print run.
pub type FileBatch = Vec<PathBuf>;

/// Recursively enumerates the files under `root` whose names carry one of
/// the suffixes registered for `code`.
///
/// Directories are always descended into; only file names are matched. The
/// walk is sorted by file name, so the batch order is deterministic for an
/// unchanged tree. A subtree that cannot be read is skipped with a warning
/// rather than failing the whole selection.
pub fn select(
    root: &Path,
    code: &str,
    registry: &LanguageRegistry,
) -> Result<FileBatch, SelectError> {
    let entry = registry.entry(code)?;

    // Canonicalizing up front both validates the root and makes every path
    // in the batch absolute.
    let root = root
        .canonicalize()
        .map_err(|_| SelectError::PathNotFound(root.display().to_string()))?;

    if root.is_file() {
        let matched = file_name_matches(&root, entry);
        return Ok(if matched { vec![root] } else { Vec::new() });
    }
    if !root.is_dir() {
        return Err(SelectError::NotADirectory(root.display().to_string()));
    }

    let mut batch = Vec::new();
    for dirent in WalkDir::new(&root).sort_by_file_name() {
        match dirent {
            Ok(dirent) if dirent.file_type().is_file() => {
                let name = dirent.file_name().to_string_lossy();
                if entry.matches(&name) {
                    batch.push(dirent.into_path());
                }
            }
            Ok(_) => {}
            Err(err) => {
                tracing::warn!("skipping unreadable entry: {err}");
            }
        }
    }

    tracing::debug!(
        "selected {} file(s) under {} for language '{}'",
        batch.len(),
        root.display(),
        code
    );
    Ok(batch)
}

fn file_name_matches(path: &Path, entry: &crate::lang::LanguageEntry) -> bool {
    path.file_name()
        .map(|name| entry.matches(&name.to_string_lossy()))
        .unwrap_or(false)
}
