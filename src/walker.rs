//! Markdown discovery: recursive descent under the root, pruning ignored names.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::Error;

/// Entry names never descended into or scanned, wherever they appear below the root.
pub const IGNORED_NAMES: [&str; 3] = [".git", "_site", "node_modules"];

/// Collect every regular `.md` file under `root`, sorted by full path.
///
/// Symbolic links are neither followed nor reported. Entries named in
/// [`IGNORED_NAMES`] are pruned together with their subtree.
///
/// # Errors
///
/// Returns `Error::Traversal` for the first directory that cannot be listed.
/// A partial tree would read as clean, so nothing is skipped.
pub fn discover(root: &Path) -> Result<Vec<PathBuf>, Error> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| return e.depth() == 0 || !is_ignored(e));

    for entry in walker {
        let entry = entry.map_err(|e| return traversal_error(root, e))?;
        if is_markdown_file(&entry) {
            files.push(entry.into_path());
        }
    }

    // Plain string order: `docs.md` sorts before `docs/a.md`.
    files.sort_by(|a, b| return a.as_os_str().cmp(b.as_os_str()));
    return Ok(files);
}

/// Whether the entry's name is one of the fixed ignored names.
fn is_ignored(entry: &DirEntry) -> bool {
    return entry
        .file_name()
        .to_str()
        .is_some_and(|name| return IGNORED_NAMES.contains(&name));
}

/// Regular file whose name ends in `.md`. The suffix match is case-sensitive.
fn is_markdown_file(entry: &DirEntry) -> bool {
    return entry.file_type().is_file() && entry.file_name().as_encoded_bytes().ends_with(b".md");
}

/// Convert a walkdir failure into a traversal error naming the offending path.
fn traversal_error(root: &Path, err: walkdir::Error) -> Error {
    let path = err.path().map_or_else(|| return root.to_path_buf(), Path::to_path_buf);
    let message = err.to_string();
    let source = err.into_io_error().unwrap_or_else(|| return std::io::Error::other(message));
    return Error::Traversal { path, source };
}
