//! The per-document pipeline: extract, classify, resolve, check existence.

use std::path::Path;

use crate::classify;
use crate::error::Error;
use crate::resolver;
use crate::scanner;
use crate::types::{BrokenLink, DocumentReport, LinkOccurrence, RunSummary};
use crate::walker;

/// Check every markdown document under `root` and aggregate the findings.
/// Documents are processed one at a time in sorted-path order.
///
/// # Errors
///
/// Returns `Error::Traversal` if the tree cannot be walked and `Error::Read`
/// if a document cannot be read. Broken links are findings, not errors.
pub fn run(root: &Path) -> Result<RunSummary, Error> {
    let mut summary = RunSummary::default();
    for path in walker::discover(root)? {
        summary.push(check_document(root, &path)?);
    }
    return Ok(summary);
}

/// Read one document and collect the links whose targets are missing.
///
/// # Errors
///
/// Returns `Error::Read` if the file cannot be read.
pub fn check_document(root: &Path, path: &Path) -> Result<DocumentReport, Error> {
    let bytes = std::fs::read(path).map_err(|source| {
        return Error::Read { path: path.to_path_buf(), source };
    })?;
    let content = String::from_utf8_lossy(&bytes);
    let doc_dir = path.parent().unwrap_or_else(|| return Path::new(""));

    let broken = scanner::extract_links(&content)
        .filter(|occurrence| return is_broken(doc_dir, occurrence))
        .map(BrokenLink::from)
        .collect();

    return Ok(DocumentReport {
        broken,
        path: path.strip_prefix(root).unwrap_or(path).to_path_buf(),
    });
}

/// A link is broken when it is checkable and its resolved target is missing.
fn is_broken(doc_dir: &Path, occurrence: &LinkOccurrence) -> bool {
    if !classify::classify(&occurrence.target).is_checked() {
        return false;
    }
    let Some(resolved) = resolver::resolve(doc_dir, &occurrence.target) else {
        return false;
    };
    return !target_exists(&resolved);
}

/// Whether anything exists at `path`. Directories count, and any stat failure
/// (permission denied included) is treated as missing.
pub fn target_exists(path: &Path) -> bool {
    return path.exists();
}
