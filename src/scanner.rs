use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::types::LinkOccurrence;

/// Inline link: a non-empty label without `]`, then a non-empty target without `)`.
/// Nested brackets, reference-style links, autolinks and raw HTML are not recognized.
#[allow(clippy::expect_used, reason = "hardcoded pattern is a compile-time invariant")]
static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| return Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid regex"));

/// Lazily extract every link in `content`, in line order and then match order.
pub fn extract_links(content: &str) -> impl Iterator<Item = LinkOccurrence> + '_ {
    return content
        .lines()
        .zip(1_u32..)
        .flat_map(|(line, number)| return extract_line(line, number));
}

/// Extract the links on a single line, left to right.
/// Each call scans from the start of `line`; nothing carries over between lines.
pub fn extract_line(line: &str, line_number: u32) -> impl Iterator<Item = LinkOccurrence> + '_ {
    return LINK_PATTERN
        .captures_iter(line)
        .filter_map(move |cap| return occurrence_from_capture(&cap, line_number));
}

/// Build an occurrence from a pattern match, trimming label and target.
fn occurrence_from_capture(cap: &Captures<'_>, line_number: u32) -> Option<LinkOccurrence> {
    let label = cap.get(1)?.as_str().trim();
    let target = cap.get(2)?.as_str().trim();
    return Some(LinkOccurrence {
        label: label.to_string(),
        line: line_number,
        target: target.to_string(),
    });
}
