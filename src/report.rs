// src/report.rs
// =============================================================================
// The run summary printed at the end: a table for humans, or JSON for
// scripts (--json).
//
// Failed assets show up here and in the log, but never change the exit code.
// =============================================================================

use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;

use crate::assets::{AssetOutcome, AssetStatus};

#[derive(Debug, Serialize)]
pub struct MirrorReport {
    pub repository: String,
    pub revision: String,
    pub destination: PathBuf,
    pub document: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<PathBuf>,
    pub assets: Vec<AssetOutcome>,
}

impl MirrorReport {
    pub fn retrieved(&self) -> usize {
        self.assets.iter().filter(|a| a.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.assets.len() - self.retrieved()
    }
}

// Prints the report either as a table or JSON
pub fn print_report(report: &MirrorReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print_table(report);
    }
    Ok(())
}

fn print_table(report: &MirrorReport) {
    println!("📄 {}", report.document.display());

    if !report.assets.is_empty() {
        println!();
        println!("{:<50} {:<12} {:<40}", "ASSET", "STATUS", "DETAIL");
        println!("{}", "=".repeat(102));

        for outcome in &report.assets {
            let (status, detail) = match &outcome.status {
                AssetStatus::Ok { bytes } => ("✅ OK".to_string(), format!("{} bytes", bytes)),
                AssetStatus::Failed { message } => ("❌ FAILED".to_string(), message.clone()),
            };

            // Truncate long references so the table stays aligned
            let reference = &outcome.asset.path;
            let reference_display = if reference.chars().count() > 47 {
                format!("{}...", reference.chars().take(47).collect::<String>())
            } else {
                reference.clone()
            };

            println!("{:<50} {:<12} {:<40}", reference_display, status, detail);
        }
    }

    println!();
    println!("📊 Summary:");
    println!("   ✅ Retrieved: {}", report.retrieved());
    println!("   ❌ Failed: {}", report.failed());
    println!("   📋 Total: {}", report.assets.len());
    if let Some(script) = &report.script {
        println!("\n💡 Run {} inside the mirror to turn it into a full clone", script.display());
    }
}
