// src/github/repo.rs
// =============================================================================
// The repository we are mirroring: where it lives and which revision.
//
// Strategy:
// - Parse the link with the `url` crate and insist on github.com
// - Keep only https://github.com/<owner>/<repo> as the canonical base
// - Every file (README and assets) is fetched from the same pattern:
//     <base>/raw/<revision>/<relative-path>
//
// Validation happens here, before any HTTP client exists, so a bad link
// never produces network traffic.
// =============================================================================

use url::Url;

use crate::error::MirrorError;

/// Branch used when the caller does not name one.
pub const DEFAULT_REVISION: &str = "master";

/// The document we mirror, relative to the repository root.
pub const DOCUMENT_NAME: &str = "README.md";

const GITHUB_HOSTS: [&str; 2] = ["github.com", "www.github.com"];

// Path segment GitHub uses for "raw bytes of this file at this revision"
const RAW_SEGMENT: &str = "raw";

/// An immutable reference to a GitHub repository at a revision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    base: String,
    name: String,
    revision: String,
}

impl RepoRef {
    /// Parses and validates a repository link.
    ///
    /// Accepts `https://github.com/owner/repo`, a trailing `.git` or `/`,
    /// deeper paths such as `/tree/main` (dropped) and links without a scheme.
    pub fn parse(repo_url: &str, revision: &str) -> Result<Self, MirrorError> {
        let trimmed = repo_url.trim();
        let with_scheme = if trimmed.contains("://") {
            trimmed.to_string()
        } else {
            format!("https://{}", trimmed)
        };

        let mut url = Url::parse(&with_scheme).map_err(|e| MirrorError::InvalidUrl {
            url: repo_url.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(MirrorError::InvalidUrl {
                url: repo_url.to_string(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        let host = url.host_str().unwrap_or_default().to_ascii_lowercase();
        if !GITHUB_HOSTS.contains(&host.as_str()) {
            return Err(MirrorError::InvalidHost {
                url: repo_url.to_string(),
            });
        }

        let (owner, repo) = {
            let segments: Vec<&str> = url
                .path_segments()
                .map(|s| s.filter(|segment| !segment.is_empty()).collect())
                .unwrap_or_default();

            match segments.as_slice() {
                [owner, repo, ..] => (owner.to_string(), repo.trim_end_matches(".git").to_string()),
                _ => {
                    return Err(MirrorError::InvalidUrl {
                        url: repo_url.to_string(),
                        reason: "expected https://github.com/<owner>/<repo>".to_string(),
                    })
                }
            }
        };

        if repo.is_empty() {
            return Err(MirrorError::InvalidUrl {
                url: repo_url.to_string(),
                reason: "repository name is empty".to_string(),
            });
        }

        url.set_path(&format!("/{}/{}", owner, repo));
        url.set_query(None);
        url.set_fragment(None);

        Ok(Self {
            base: url.as_str().trim_end_matches('/').to_string(),
            name: repo,
            revision: normalize_revision(revision),
        })
    }

    /// Builds a reference to an arbitrary server without the GitHub host check.
    /// Tests point this at a loopback server.
    #[cfg(test)]
    pub(crate) fn with_base(base: &str, revision: &str) -> Self {
        let base = base.trim_end_matches('/').to_string();
        let name = base.rsplit('/').next().unwrap_or_default().to_string();
        Self {
            base,
            name,
            revision: normalize_revision(revision),
        }
    }

    /// Repository name, used as the local destination directory name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn revision(&self) -> &str {
        &self.revision
    }

    /// Canonical repository URL, e.g. `https://github.com/owner/repo`.
    pub fn clone_url(&self) -> &str {
        &self.base
    }

    /// Raw-content URL of `relative_path` at this revision.
    pub fn raw_url(&self, relative_path: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.base,
            RAW_SEGMENT,
            self.revision,
            relative_path.trim_start_matches('/')
        )
    }
}

fn normalize_revision(revision: &str) -> String {
    let revision = revision.trim();
    if revision.is_empty() {
        DEFAULT_REVISION.to_string()
    } else {
        revision.to_string()
    }
}
