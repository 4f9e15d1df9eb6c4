// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Usage:
//   readme-mirror <REPO_URL> [REVISION] [OPTIONS]
//
// Missing or extra positional arguments make clap print the usage text and
// exit with a non-zero status before anything else runs.
// =============================================================================

use std::path::PathBuf;

use clap::Parser;

use crate::github::DEFAULT_REVISION;

// The whole CLI: two positionals plus a handful of optional flags
//
// #[derive(Parser)] tells clap to automatically generate parsing code
#[derive(Parser, Debug)]
#[command(
    name = "readme-mirror",
    version,
    about = "Mirror a GitHub repository README and its local assets to disk",
    long_about = "readme-mirror downloads the README.md of a GitHub repository together with \
                  every image, stylesheet and script it references by a repository-relative path, \
                  so the document renders offline. It also writes an expand.sh script that turns \
                  the mirror into a full clone later."
)]
pub struct Cli {
    /// GitHub repository URL (e.g., https://github.com/user/repo)
    pub repo_url: String,

    /// Branch or tag to mirror
    #[arg(default_value = DEFAULT_REVISION)]
    pub revision: String,

    /// Directory in which the mirror directory is created
    ///
    /// The mirror itself is <OUTPUT_DIR>/<repository-name>
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// How many assets to download at once (1 = one after another)
    #[arg(short, long, default_value_t = 1)]
    pub jobs: usize,

    /// Per-request timeout in seconds (no timeout when omitted)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Output the run report in JSON format instead of a table
    #[arg(long)]
    pub json: bool,

    /// Do not write the expand.sh rebase script
    #[arg(long)]
    pub no_script: bool,

    /// Log debug details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revision_defaults_to_master() {
        let cli = Cli::try_parse_from(["readme-mirror", "https://github.com/user/repo"]).unwrap();
        assert_eq!(cli.repo_url, "https://github.com/user/repo");
        assert_eq!(cli.revision, "master");
        assert_eq!(cli.jobs, 1);
        assert!(cli.timeout.is_none());
        assert_eq!(cli.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_explicit_revision_and_flags() {
        let cli = Cli::try_parse_from([
            "readme-mirror",
            "https://github.com/user/repo",
            "v1.2.0",
            "--jobs",
            "4",
            "--timeout",
            "30",
            "--json",
            "-o",
            "/tmp/mirrors",
        ])
        .unwrap();
        assert_eq!(cli.revision, "v1.2.0");
        assert_eq!(cli.jobs, 4);
        assert_eq!(cli.timeout, Some(30));
        assert!(cli.json);
        assert_eq!(cli.output_dir, PathBuf::from("/tmp/mirrors"));
    }

    #[test]
    fn test_missing_url_is_rejected() {
        assert!(Cli::try_parse_from(["readme-mirror"]).is_err());
    }

    #[test]
    fn test_extra_positional_is_rejected() {
        let result = Cli::try_parse_from([
            "readme-mirror",
            "https://github.com/user/repo",
            "main",
            "unexpected",
        ]);
        assert!(result.is_err());
    }
}
