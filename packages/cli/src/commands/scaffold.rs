use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagecraft_document::Document;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ScaffoldArgs {
    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

/// Print the default document used when stored content is unusable
pub fn scaffold(args: ScaffoldArgs) -> Result<()> {
    let json = serde_json::to_string_pretty(&Document::scaffold())?;

    match args.out {
        Some(path) => {
            std::fs::write(&path, json)?;
            println!("{} Wrote {}", "✓".green(), path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
