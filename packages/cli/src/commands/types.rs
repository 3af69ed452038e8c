use crate::config::Config;
use crate::content::{find_content_files, load_entries};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagecraft_document::{node_types, Document};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Args, Debug)]
pub struct TypesArgs {
    /// Content file or directory to scan
    pub input: PathBuf,

    /// Additional component names to treat as registered
    #[arg(short, long = "component")]
    pub components: Vec<String>,
}

/// List node types reachable from ROOT across all stored documents
pub fn types(args: TypesArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let resolver = config.resolver(&args.components);

    let mut contents = Vec::new();
    for file in find_content_files(&args.input, &config.extension)? {
        contents.extend(load_entries(&file)?.into_iter().map(|entry| entry.content));
    }

    let found = collect_types(&contents);
    if found.is_empty() {
        println!("{}", "No node types found".yellow());
        return Ok(());
    }

    println!("Node types found:");
    for name in &found {
        if resolver.is_resolvable(name) {
            println!("  {} {}", "✓".green(), name);
        } else {
            println!("  {} {} {}", "✗".red(), name, "(unregistered)".dimmed());
        }
    }

    Ok(())
}

/// Distinct node types in first-seen order; undecodable documents are skipped
pub fn collect_types(contents: &[Value]) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();

    for content in contents {
        let document = match Document::from_value(content) {
            Ok(document) => document,
            Err(err) => {
                warn!(error = %err, "Skipping undecodable document");
                continue;
            }
        };

        for name in node_types(&document) {
            if !found.contains(&name) {
                found.push(name);
            }
        }
    }

    found
}
