/// Crate-level error types for linkcheck diagnostics.
use std::path::PathBuf;

/// Fatal failures that abort a run. A broken link is never one of these:
/// it is a finding, collected and reported after the whole tree is checked.
/// Each variant names the path it failed on so the diagnostic stands alone.
#[allow(clippy::error_impl_error, reason = "crate-internal error type in binary")]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The JSON report could not be serialized.
    #[error("json serialize: {0}")]
    Json(
        /// The wrapped serialization error.
        #[from]
        serde_json::Error,
    ),

    /// A discovered markdown document could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Read {
        /// Document that failed to read.
        path: PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },

    /// The default root is derived from the executable location, which could not be found.
    #[error("cannot locate document root: {reason}")]
    RootUnavailable {
        /// Why the executable location did not yield a root.
        reason: String,
    },

    /// A directory under the root could not be listed.
    #[error("cannot traverse {}: {source}", path.display())]
    Traversal {
        /// Directory (or entry) the walk failed on.
        path: PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },
}
