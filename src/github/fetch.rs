// src/github/fetch.rs
// =============================================================================
// This module fetches the README from a GitHub repository and saves a
// canonical copy of it into the mirror directory.
//
// Strategy:
// - GET <repo>/raw/<revision>/README.md (GitHub redirects to the raw host)
// - Any transport error or non-2xx status ends the run: without the README
//   there is nothing to mirror
// - Canonicalize the bytes once, write them to <destination>/README.md
//   (no re-encoding: a Latin-1 README stays Latin-1)
// =============================================================================

use std::path::Path;
use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info};

use super::repo::{RepoRef, DOCUMENT_NAME};
use crate::document::Document;
use crate::error::MirrorError;

// Creates the HTTP client shared by the README fetch and asset downloads
//
// Parameters:
//   timeout: per-request timeout in seconds, None = wait forever
pub fn http_client(timeout: Option<u64>) -> anyhow::Result<Client> {
    let mut builder = Client::builder().user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));
    if let Some(secs) = timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(builder.build()?)
}

// Fetches, canonicalizes and persists the README
//
// Parameters:
//   client: reqwest HTTP client
//   repo: validated repository reference
//   destination: mirror directory (created if missing)
//
// Returns: the canonical document, ready for asset extraction
pub async fn fetch_document(
    client: &Client,
    repo: &RepoRef,
    destination: &Path,
) -> Result<Document, MirrorError> {
    let url = repo.raw_url(DOCUMENT_NAME);
    debug!(%url, "fetching document");

    let raw = fetch_body(client, &url).await?;
    let document = Document::from_raw(DOCUMENT_NAME, &raw);

    tokio::fs::create_dir_all(destination)
        .await
        .map_err(|source| MirrorError::Persist {
            path: destination.to_path_buf(),
            source,
        })?;

    let path = destination.join(document.name());
    tokio::fs::write(&path, document.bytes())
        .await
        .map_err(|source| MirrorError::Persist {
            path: path.clone(),
            source,
        })?;

    info!(path = %path.display(), bytes = document.bytes().len(), "wrote document");
    Ok(document)
}

async fn fetch_body(client: &Client, url: &str) -> Result<Vec<u8>, MirrorError> {
    let fetch_error = |reason: String| MirrorError::Fetch {
        url: url.to_string(),
        reason,
    };

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| fetch_error(e.to_string()))?;

    if !response.status().is_success() {
        return Err(fetch_error(format!("HTTP {}", response.status())));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| fetch_error(e.to_string()))?;

    Ok(bytes.to_vec())
}
