//! Command handlers: wire parsed arguments to the classification pipeline
//! and render the result.

use super::commands::ClassifyArgs;
use super::output::OutputFormatter;
use crate::classify::classify_path;
use crate::inventory::ScanConfig;
use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::PathBuf;
use tracing::{error, info};

/// Runs the classify command. Returns the process exit code: 0 on success,
/// 1 on any actionable failure (missing root, unwritable output file).
pub fn handle_classify(args: &ClassifyArgs, quiet: bool) -> i32 {
    match run_classify(args, quiet) {
        Ok(()) => 0,
        Err(err) => {
            error!(error = %err, "Classification failed");
            eprintln!("Error: {:#}", err);
            1
        }
    }
}

fn run_classify(args: &ClassifyArgs, quiet: bool) -> Result<()> {
    let root = match &args.path {
        Some(path) => path.clone(),
        None => env::current_dir().context("Failed to resolve current directory")?,
    };
    let name = args
        .name
        .clone()
        .or_else(|| display_name(&root))
        .unwrap_or_else(|| "project".to_string());

    let config = ScanConfig {
        max_depth: args.max_depth,
        max_files: args.max_files,
    };

    // A missing or invalid root is the one user-actionable failure; every
    // other condition already resolved to a best-effort record.
    let record = classify_path(&name, &root, &config)?;

    let formatter = OutputFormatter::new(args.format.into());
    let rendered = formatter.format(&record)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            if !quiet {
                info!(path = %path.display(), "Classification written");
            }
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

fn display_name(root: &PathBuf) -> Option<String> {
    root.file_name()
        .and_then(|n| n.to_str())
        .map(|s| s.to_string())
}
