// src/assets/retrieve.rs
// =============================================================================
// This module downloads every asset the README references into the mirror.
//
// How it works:
// 1. Turn each reference into a clean relative path (mirror_path)
// 2. GET <repo>/raw/<revision>/<path>
// 3. Create the parent directories under the destination
// 4. Stream the body into a hidden temp file, then rename it into place
//
// Any failure in steps 1-4 is logged and recorded; the next asset still runs.
// With jobs = 1 (the default) assets are fetched strictly one at a time, in
// the order they were extracted.
// =============================================================================

use std::path::{Path, PathBuf};

use futures::stream::{self, StreamExt};
use reqwest::Client;
use serde::Serialize;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

use crate::document::AssetRef;
use crate::error::AssetError;
use crate::github::RepoRef;

/// Result of retrieving one asset reference.
#[derive(Debug, Clone, Serialize)]
pub struct AssetOutcome {
    #[serde(flatten)]
    pub asset: AssetRef,
    /// Raw-content URL, when the reference could be turned into one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Where the file was (or would have been) written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(flatten)]
    pub status: AssetStatus,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AssetStatus {
    Ok { bytes: u64 },
    Failed { message: String },
}

impl AssetOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self.status, AssetStatus::Ok { .. })
    }
}

// Turns a reference into a path relative to the repository root
//
// - query strings and fragments are dropped ("a.png?v=2#x" -> "a.png")
// - "." and empty segments are dropped ("./img//a.png" -> "img/a.png")
// - ".." pops a segment; popping past the root is rejected
//
// Returns: path segments, or None if nothing is left or the path escapes
pub fn mirror_path(reference: &str) -> Option<Vec<String>> {
    let path = reference
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim();

    let mut segments: Vec<String> = Vec::new();
    for segment in path.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop()?;
            }
            other => segments.push(other.to_string()),
        }
    }

    if segments.is_empty() {
        None
    } else {
        Some(segments)
    }
}

// Downloads all references into `destination`
//
// Parameters:
//   client: reqwest HTTP client
//   repo: repository + revision the assets belong to
//   destination: mirror directory
//   refs: references in extraction order (duplicates allowed)
//   jobs: how many downloads may be in flight at once (min 1)
//
// Returns: one outcome per reference, in the same order as `refs`
pub async fn retrieve_assets(
    client: &Client,
    repo: &RepoRef,
    destination: &Path,
    refs: &[AssetRef],
    jobs: usize,
) -> Vec<AssetOutcome> {
    if refs.is_empty() {
        debug!("no local assets referenced");
        return Vec::new();
    }

    info!(count = refs.len(), "retrieving assets");

    stream::iter(refs.iter().enumerate())
        .map(|(index, asset)| retrieve_one(client, repo, destination, index, asset))
        .buffered(jobs.max(1))
        .collect()
        .await
}

async fn retrieve_one(
    client: &Client,
    repo: &RepoRef,
    destination: &Path,
    index: usize,
    asset: &AssetRef,
) -> AssetOutcome {
    let segments = match mirror_path(&asset.path) {
        Some(segments) => segments,
        None => {
            let error = AssetError::UnsafePath {
                reference: asset.path.clone(),
            };
            warn!(reference = %asset.path, "skipping asset: {}", error);
            return AssetOutcome {
                asset: asset.clone(),
                url: None,
                path: None,
                status: AssetStatus::Failed {
                    message: error.to_string(),
                },
            };
        }
    };

    let url = repo.raw_url(&segments.join("/"));
    let target: PathBuf = segments.iter().fold(destination.to_path_buf(), |p, s| p.join(s));

    let status = match download(client, &url, &target, index).await {
        Ok(bytes) => {
            info!(reference = %asset.path, bytes, "retrieved asset");
            AssetStatus::Ok { bytes }
        }
        Err(error) => {
            warn!(reference = %asset.path, %url, "failed to download asset: {}", error);
            AssetStatus::Failed {
                message: error.to_string(),
            }
        }
    };

    AssetOutcome {
        asset: asset.clone(),
        url: Some(url),
        path: Some(target),
        status,
    }
}

// GETs `url` and writes the body to `target` via a temp file
//
// The temp file lives next to the target (same filesystem, so rename is
// atomic) and carries the reference index, so two references to the same
// path never share a temp file.
async fn download(client: &Client, url: &str, target: &Path, index: usize) -> Result<u64, AssetError> {
    let mut response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(AssetError::Status(status.as_u16()));
    }

    let parent = target.parent().unwrap_or(target);
    tokio::fs::create_dir_all(parent)
        .await
        .map_err(|source| AssetError::Io {
            path: parent.to_path_buf(),
            source,
        })?;

    let file_name = target
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temp_path = parent.join(format!(".{}.{}.part", file_name, index));

    let written = match write_body(&mut response, &temp_path).await {
        Ok(written) => written,
        Err(error) => {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(error);
        }
    };

    if let Err(source) = tokio::fs::rename(&temp_path, target).await {
        let _ = tokio::fs::remove_file(&temp_path).await;
        return Err(AssetError::Io {
            path: target.to_path_buf(),
            source,
        });
    }

    Ok(written)
}

async fn write_body(response: &mut reqwest::Response, temp_path: &Path) -> Result<u64, AssetError> {
    let io_error = |source| AssetError::Io {
        path: temp_path.to_path_buf(),
        source,
    };

    let mut file = tokio::fs::File::create(temp_path).await.map_err(io_error)?;
    let mut written: u64 = 0;
    while let Some(chunk) = response.chunk().await? {
        file.write_all(&chunk).await.map_err(io_error)?;
        written += chunk.len() as u64;
    }
    file.flush().await.map_err(io_error)?;

    Ok(written)
}
