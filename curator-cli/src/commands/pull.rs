//! `curator pull` — rolling pull of every configured repository.

use std::io;
use std::path::Path;

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use curator_core::RemoteSource;
use curator_sync::{run_rolling_pull, PullOptions};

/// Arguments for `curator pull`.
#[derive(Args, Debug)]
pub struct PullArgs {
    /// Remote source shown in the header: github | gitea.
    #[arg(long, short = 's', default_value = "github", value_name = "SOURCE")]
    pub source: RemoteSource,
}

impl PullArgs {
    pub fn run(self, config_path: &Path) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();

        match run_rolling_pull(config_path, self.source, &PullOptions::default(), &mut out) {
            Ok(_) => Ok(()),
            Err(err) => {
                drop(out);
                eprintln!("{}", err.to_string().red());
                std::process::exit(1);
            }
        }
    }
}
