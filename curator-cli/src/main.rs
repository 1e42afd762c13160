//! Curator — keep local mirrors of remote git repositories up to date.
//!
//! # Usage
//!
//! ```text
//! curator [--config <path>] pull [--source github|gitea]
//! curator [--config <path>] config --create | --open | --print
//! curator version [--only]
//! ```

mod commands;
mod editor;
mod prompt;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use commands::{config::ConfigArgs, pull::PullArgs, version::VersionArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "curator",
    version,
    about = "Keep a local mirror of your git repositories in sync",
    long_about = None,
)]
struct Cli {
    /// Configuration file (defaults to <config dir>/curator/config.toml).
    #[arg(long, short = 'c', global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Pull every configured repository, one at a time.
    Pull(PullArgs),

    /// Create, open or print the configuration file.
    Config(ConfigArgs),

    /// Print version and build information.
    Version(VersionArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Commands::Pull(args) => args.run(&config_path(cli.config)?),
        Commands::Config(args) => args.run(&config_path(cli.config)?),
        Commands::Version(args) => args.run(),
    }
}

fn config_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => curator_core::config::default_config_path()
            .context("could not determine configuration file location"),
    }
}

/// Diagnostics go to stderr so report lines on stdout stay exact.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_env("CURATOR_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
