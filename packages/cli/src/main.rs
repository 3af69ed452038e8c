mod commands;
mod config;
mod content;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{scaffold, types, validate, ScaffoldArgs, TypesArgs, ValidateArgs};

/// Pagecraft CLI - checks stored page content before it reaches the renderer
#[derive(Parser, Debug)]
#[command(name = "pagecraft")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate stored editor documents
    Validate(ValidateArgs),

    /// List node types used by stored documents
    Types(TypesArgs),

    /// Print the default fallback document
    Scaffold(ScaffoldArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| match cli.command {
            Command::Validate(args) => validate(args, &cwd),
            Command::Types(args) => types(args, &cwd),
            Command::Scaffold(args) => scaffold(args),
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
