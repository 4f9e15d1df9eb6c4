// src/error.rs
// =============================================================================
// Error types for the mirror.
//
// There are two tiers of failure:
// - MirrorError: fatal, the whole run stops (bad link, README missing,
//   cannot write to disk)
// - AssetError: one asset failed, we log it and move on to the next one
//
// We use `thiserror` to derive Display and std::error::Error for us.
// The binary's run() returns anyhow::Result, and both of these convert into
// anyhow::Error automatically through the ? operator.
// =============================================================================

use std::path::PathBuf;

/// Failures that abort the whole run.
#[derive(Debug, thiserror::Error)]
pub enum MirrorError {
    /// The repository link could not be parsed or is missing owner/repo.
    #[error("invalid repository URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The link parsed fine but does not point at GitHub.
    #[error("the provided link is not a GitHub repository link: {url}")]
    InvalidHost { url: String },

    /// The README could not be downloaded.
    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// The README or the rebase script could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure of a single asset. Never aborts the batch.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// The reference resolves outside the destination directory (or to nothing).
    #[error("reference does not name a file inside the repository: {reference}")]
    UnsafePath { reference: String },

    /// Connection, TLS or body read error.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("unexpected status code {0}")]
    Status(u16),

    /// Directory creation, file creation, copy or rename failed.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
