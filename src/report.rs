//! Rendering of a finished run and the exit status it maps to.

use std::fmt::Write as _;

use serde::Serialize;

use crate::error::Error;
use crate::types::{BrokenLink, RunSummary};

/// Exit status when every checked link resolved.
pub const EXIT_CLEAN: u8 = 0;
/// Exit status when at least one broken link was found.
pub const EXIT_BROKEN: u8 = 1;
/// Exit status for fatal traversal or read failures.
pub const EXIT_FATAL: u8 = 2;

/// Machine-readable report, same ordering as the text form.
#[derive(Serialize)]
struct JsonReport<'a> {
    /// Number of markdown documents examined.
    documents_scanned: usize,
    /// Documents with at least one broken link.
    files: Vec<JsonFile<'a>>,
    /// Sum of broken links over all files.
    total_broken: usize,
}

/// One document's entry in the JSON report.
#[derive(Serialize)]
struct JsonFile<'a> {
    /// Broken links in line then match order.
    broken: &'a [BrokenLink],
    /// Path relative to the root, `/`-separated on unix.
    path: String,
}

/// Status for a run: clean or broken. Fatal errors never reach the reporter.
pub fn exit_status(summary: &RunSummary) -> u8 {
    if summary.total_broken() == 0 {
        return EXIT_CLEAN;
    }
    return EXIT_BROKEN;
}

/// Render the run as JSON.
///
/// # Errors
///
/// Returns `Error::Json` if serialization fails.
pub fn render_json(summary: &RunSummary) -> Result<String, Error> {
    let report = JsonReport {
        documents_scanned: summary.documents_scanned,
        files: summary
            .documents
            .iter()
            .map(|d| {
                return JsonFile {
                    broken: &d.broken,
                    path: d.path.to_string_lossy().into_owned(),
                };
            })
            .collect(),
        total_broken: summary.total_broken(),
    };
    let mut out = serde_json::to_string_pretty(&report)?;
    out.push('\n');
    return Ok(out);
}

/// Render the run in the plain-text report format.
///
/// Each affected document is preceded by a blank line and followed by one
/// indented line per broken link. A clean run is a single line.
pub fn render_text(summary: &RunSummary) -> String {
    let total = summary.total_broken();
    if total == 0 {
        return "No broken relative links found.\n".to_string();
    }

    let mut out = String::new();
    for document in &summary.documents {
        let _ = write!(out, "\n{}\n", document.path.display());
        for link in &document.broken {
            let _ = writeln!(out, "  - line {}: \"{}\" -> {}", link.line, link.label, link.target);
        }
    }
    let _ = write!(out, "\nTotal broken links: {total}\n");
    return out;
}
