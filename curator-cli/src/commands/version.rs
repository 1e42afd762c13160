//! `curator version [--only]`

use anyhow::Result;
use clap::Args;

use curator_core::BuildInfo;

/// Arguments for `curator version`.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Print only the version number.
    #[arg(long)]
    pub only: bool,
}

impl VersionArgs {
    pub fn run(self) -> Result<()> {
        println!("{}", render(&BuildInfo::current(), self.only));
        Ok(())
    }
}

fn render(info: &BuildInfo, only: bool) -> String {
    if only {
        info.version_tag()
    } else {
        info.to_string()
    }
}
