// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Validate the repository link (before any network traffic)
// 3. Fetch the README, canonicalize it, save it
// 4. Download every local asset it references (failures are non-fatal)
// 5. Write the expand.sh rebase script
// 6. Print a report and exit (0 = mirrored, 1 = fatal error)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod assets;     // src/assets/ - asset download loop
mod cli;        // src/cli.rs - command-line parsing
mod document;   // src/document/ - canonicalization and reference extraction
mod error;      // src/error.rs - fatal and per-asset error types
mod github;     // src/github/ - repository links and README fetching
mod logging;    // src/logging.rs - tracing setup
mod report;     // src/report.rs - table / JSON summary
mod script;     // src/script.rs - expand.sh

#[cfg(test)]
mod testutil;

use anyhow::{Context, Result};
use clap::Parser;
use reqwest::Client;
use tracing::info;

use cli::Cli;
use github::RepoRef;
use report::MirrorReport;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

// Validates the link and builds the HTTP client, then mirrors
//
// Returns: the process exit code; any error is fatal
async fn run(cli: Cli) -> Result<i32> {
    let repo = RepoRef::parse(&cli.repo_url, &cli.revision)?;
    let client = github::http_client(cli.timeout).context("failed to create HTTP client")?;

    mirror(&cli, &client, &repo).await
}

// The whole mirroring pipeline for an already validated repository
//
// Any error returned from here is fatal. Individual asset failures are
// handled inside assets::retrieve_assets and only show up in the report,
// so a mirror with broken assets still exits with 0.
async fn mirror(cli: &Cli, client: &Client, repo: &RepoRef) -> Result<i32> {
    let destination = cli.output_dir.join(repo.name());

    if !cli.json {
        println!("🔍 Mirroring {} at {}", repo.clone_url(), repo.revision());
    }

    let document = github::fetch_document(client, repo, &destination).await?;

    let refs = document.asset_references();
    info!(count = refs.len(), "found local asset references");
    if !cli.json {
        println!("🖼️  Found {} local asset reference(s)", refs.len());
    }

    let outcomes = assets::retrieve_assets(client, repo, &destination, &refs, cli.jobs).await;

    let script = if cli.no_script {
        None
    } else {
        Some(script::write_expand_script(&destination, repo.clone_url())?)
    };

    let report = MirrorReport {
        repository: repo.clone_url().to_string(),
        revision: repo.revision().to_string(),
        document: destination.join(github::DOCUMENT_NAME),
        destination,
        script,
        assets: outcomes,
    };
    report::print_report(&report, cli.json)?;

    Ok(0)
}
