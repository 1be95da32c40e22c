//! Link classification: which targets get an existence check.

/// Prefixes that mark a target as external. Matched case-sensitively.
const EXTERNAL_PREFIXES: [&str; 5] = ["http://", "https://", "//", "mailto:", "tel:"];

/// Mutually exclusive categories of a trimmed link target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Fragment-only navigation within the same document, e.g. `#top`.
    AnchorOnly,
    /// Nothing left after trimming.
    Empty,
    /// A URL or URI scheme that is never checked locally.
    External,
    /// A relative path that must exist on disk.
    InternalCandidate,
}

impl LinkKind {
    /// Only internal candidates are resolved and checked.
    pub const fn is_checked(self) -> bool {
        return matches!(self, LinkKind::InternalCandidate);
    }
}

/// Classify a trimmed target. Pure function of the string.
pub fn classify(target: &str) -> LinkKind {
    if target.is_empty() {
        return LinkKind::Empty;
    }
    if EXTERNAL_PREFIXES.iter().any(|p| return target.starts_with(p)) {
        return LinkKind::External;
    }
    if target.starts_with('#') {
        return LinkKind::AnchorOnly;
    }
    return LinkKind::InternalCandidate;
}
