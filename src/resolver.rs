//! Target resolution: strip the fragment, join onto the document's directory, normalize.

use std::path::{Component, Path, PathBuf};

/// Resolve an internal-candidate target against the directory of the document
/// that contains it. Returns `None` when nothing remains once the fragment is
/// removed, which makes the link anchor-only.
///
/// The target is always appended to `doc_dir`: a leading `/` does not make it
/// absolute. No filesystem access happens here, so `..` is collapsed lexically.
/// A trailing `/` survives normalization, so `page.md/` only exists as a directory.
pub fn resolve(doc_dir: &Path, target: &str) -> Option<PathBuf> {
    let base = strip_fragment(target);
    if base.is_empty() {
        return None;
    }
    let joined = doc_dir.join(base.trim_start_matches('/'));
    let mut resolved = normalize_path(&joined);
    if base.ends_with('/') {
        resolved.push("");
    }
    return Some(resolved);
}

/// Everything before the first `#`. The fragment is never validated.
pub fn strip_fragment(target: &str) -> &str {
    return target.split_once('#').map_or(target, |(base, _)| return base);
}

/// Collapse `.` and `..` components in a path without touching the filesystem.
/// Preserves leading `..` on relative paths; `..` at the root stays at the root.
fn normalize_path(path: &Path) -> PathBuf {
    let mut components: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        push_normalized_component(&mut components, component);
    }
    if components.is_empty() {
        return PathBuf::from(".");
    }
    return components.iter().collect();
}

/// Handle a single path component during normalization.
fn push_normalized_component<'a>(components: &mut Vec<Component<'a>>, component: Component<'a>) {
    match component {
        Component::CurDir => {},
        Component::ParentDir => match components.last() {
            Some(Component::Normal(_)) => {
                components.pop();
            },
            Some(Component::RootDir | Component::Prefix(_)) => {},
            Some(Component::ParentDir | Component::CurDir) | None => components.push(component),
        },
        other => components.push(other),
    }
}
