// src/github/mod.rs
// =============================================================================
// This module talks to GitHub.
//
// Currently implements:
// - Parsing and validating repository links (repo.rs)
// - Building raw-content URLs for any file at a revision
// - Fetching and persisting the README (fetch.rs)
// =============================================================================

mod fetch;
mod repo;

pub use fetch::{fetch_document, http_client};
pub use repo::{RepoRef, DEFAULT_REVISION, DOCUMENT_NAME};
