//! labsite CLI - static site generator for the lab website.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "labsite")]
#[command(about = "Static site generator for the lab website")]
#[command(version)]
pub struct Cli {
    /// Defaults to `build`
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to labsite.toml config file
    #[arg(short, long, default_value = "labsite.toml", global = true)]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the site pages
    Build {
        /// Output directory (defaults to config or ".")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Source directory with data/, components/ and templates/
        #[arg(long)]
        src: Option<PathBuf>,
    },

    /// Write starter data, components and templates
    Init {
        /// Source directory to populate
        #[arg(long)]
        src: Option<PathBuf>,

        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    if let Err(e) = run(cli) {
        report_failure(&e);
        std::process::exit(1);
    }
}

/// Log a failed run once, with its cause chain.
fn report_failure(error: &anyhow::Error) -> String {
    let message = format!("Error generating site: {:#}", error);
    tracing::error!("{}", message);
    message
}

fn run(cli: Cli) -> Result<()> {
    let file_config = config::load_config(&cli.config)?;

    match cli.command.unwrap_or(Commands::Build {
        output: None,
        src: None,
    }) {
        Commands::Build { output, src } => commands::build::run(file_config, output, src),
        Commands::Init { src, yes } => commands::init::run(file_config, src, yes),
    }
}
