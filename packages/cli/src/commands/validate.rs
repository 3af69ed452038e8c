use crate::config::Config;
use crate::content::{find_content_files, load_entries, Entry};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagecraft_document::{orphans, validate as validate_content, Document, Resolver, Verdict};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Content file or directory to validate
    pub input: PathBuf,

    /// Additional component names to accept
    #[arg(short, long = "component")]
    pub components: Vec<String>,

    /// Also report nodes that are not reachable from ROOT
    #[arg(long)]
    pub orphans: bool,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

/// Validation outcome for one document
#[derive(Debug, Serialize)]
pub struct Report {
    pub source: String,
    pub verdict: Verdict,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub orphans: Vec<String>,
}

pub fn validate(args: ValidateArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let resolver = config.resolver(&args.components);
    let files = find_content_files(&args.input, &config.extension)?;

    let mut reports = Vec::new();
    for file in &files {
        match load_entries(file) {
            Ok(entries) => reports.extend(
                entries
                    .into_iter()
                    .map(|entry| check_entry(entry, &resolver, args.orphans)),
            ),
            Err(err) => {
                eprintln!("{} Failed to read {}: {}", "✗".red(), file.display(), err);
                return Err(err);
            }
        }
    }

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        print_reports(&reports);
    }

    let invalid = reports.iter().filter(|r| !r.verdict.is_valid()).count();
    if invalid > 0 {
        return Err(anyhow::anyhow!(
            "{} of {} documents are invalid",
            invalid,
            reports.len()
        ));
    }

    Ok(())
}

pub fn check_entry(entry: Entry, resolver: &Resolver, report_orphans: bool) -> Report {
    let verdict = validate_content(&entry.content, resolver);

    let unreachable = if report_orphans && verdict.is_valid() {
        Document::from_value(&entry.content)
            .map(|document| orphans(&document))
            .unwrap_or_default()
    } else {
        Vec::new()
    };

    Report {
        source: entry.label,
        verdict,
        orphans: unreachable,
    }
}

fn print_reports(reports: &[Report]) {
    for report in reports {
        match &report.verdict {
            Verdict::Valid => println!("{} {}", "✓".green(), report.source),
            Verdict::Invalid(violation) => {
                println!("{} {}", "✗".red(), report.source);
                println!("    {} {}", "error".red().bold(), violation);
            }
        }

        for orphan in &report.orphans {
            println!(
                "    {} node '{}' is not reachable from ROOT",
                "warning".yellow().bold(),
                orphan
            );
        }
    }

    let valid = reports.iter().filter(|r| r.verdict.is_valid()).count();
    println!();
    println!("   Documents checked: {}", reports.len());
    println!("   {} {}", "Valid:".green(), valid);
    if valid < reports.len() {
        println!("   {} {}", "Invalid:".red(), reports.len() - valid);
    }
}
