/// Core domain types for link occurrences and check results.
use std::path::PathBuf;

use serde::Serialize;

/// A relative link whose target does not exist on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrokenLink {
    /// Trimmed link label.
    pub label: String,
    /// One-based line number in the referencing document.
    pub line: u32,
    /// Trimmed target exactly as written, fragment included.
    pub target: String,
}

impl From<LinkOccurrence> for BrokenLink {
    fn from(occurrence: LinkOccurrence) -> Self {
        return Self {
            label: occurrence.label,
            line: occurrence.line,
            target: occurrence.target,
        };
    }
}

/// Broken links found in one document, in line then match order.
#[derive(Debug, Clone)]
pub struct DocumentReport {
    /// Broken links in the order they appear.
    pub broken: Vec<BrokenLink>,
    /// Document path relative to the scanned root.
    pub path: PathBuf,
}

/// One `[label](target)` match on a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkOccurrence {
    /// Label with surrounding whitespace removed.
    pub label: String,
    /// One-based line number.
    pub line: u32,
    /// Target with surrounding whitespace removed. May be empty.
    pub target: String,
}

/// Aggregated outcome of one run. Documents are kept in sorted-path order
/// and only those with at least one broken link are stored.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Documents with broken links, sorted by relative path.
    pub documents: Vec<DocumentReport>,
    /// Number of markdown documents examined.
    pub documents_scanned: usize,
}

impl RunSummary {
    /// Record a checked document. Clean documents only bump the scan count.
    pub fn push(&mut self, report: DocumentReport) {
        self.documents_scanned = self.documents_scanned.saturating_add(1);
        if !report.broken.is_empty() {
            self.documents.push(report);
        }
    }

    /// Total broken links across every document.
    pub fn total_broken(&self) -> usize {
        return self.documents.iter().map(|d| return d.broken.len()).sum();
    }
}
