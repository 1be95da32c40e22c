use std::fmt::Write as _;
use std::path::Path;

use crate::error::Error;

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Render an error as markdown with bold headings and print to stderr.
pub fn print_error(e: &Error) {
    let md = render_error(e);
    for line in md.lines() {
        if line.starts_with('#') {
            eprintln!("{BOLD}{line}{RESET}");
        } else {
            eprintln!("{line}");
        }
    }
}

/// Render an error as a structured markdown diagnostic: what happened, where, how to fix it.
pub fn render_error(e: &Error) -> String {
    match e {
        Error::Json(inner) => format!("\
# Error: JSON Report

{inner}
"),
        Error::Read { path, source } => render_io_failure("Unreadable Document", path, source),
        Error::RootUnavailable { reason } => format!("\
# Error: Root Not Found

{reason}

## Fix

Pass the directory to check explicitly:

    linkcheck --root path/to/docs
"),
        Error::Traversal { path, source } => render_io_failure("Traversal Failed", path, source),
    }
}

/// Shared layout for filesystem failures. The run was aborted, so the report is withheld.
fn render_io_failure(heading: &str, path: &Path, source: &std::io::Error) -> String {
    let mut out = format!("\
# Error: {heading}

`{}`: {source}

No report was produced: an incomplete tree would look clean.
", path.display());

    if source.kind() == std::io::ErrorKind::PermissionDenied {
        out.push_str("\n## Fix\n\nGrant read access to the path above, then rerun.\n");
    } else if source.kind() == std::io::ErrorKind::NotFound {
        let _ = write!(out, "\n## Fix\n\nCheck that `{}` exists, or pass `--root`.\n", path.display());
    }
    out
}
