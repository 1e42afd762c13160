//! `curator config --create | --open | --print`

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::{ArgGroup, Args};
use colored::Colorize;

use curator_core::config;

use crate::{editor, prompt};

const NOT_FOUND_MESSAGE: &str =
    "Configuration file not found (use --create to create a configuration file)";

/// Arguments for `curator config`.
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("action").required(true).args(["create", "open", "print"])))]
pub struct ConfigArgs {
    /// Write a default configuration file, asking before overwriting.
    #[arg(long)]
    pub create: bool,

    /// Open the configuration file in $EDITOR (falls back to vim, then vi).
    #[arg(long)]
    pub open: bool,

    /// Print the configuration file.
    #[arg(long)]
    pub print: bool,
}

/// What `--create` should do with an existing file.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Overwrite {
    Yes,
    No,
    Unexpected(String),
}

impl Overwrite {
    fn from_answer(answer: &str) -> Self {
        match answer {
            "y" => Overwrite::Yes,
            "n" => Overwrite::No,
            other => Overwrite::Unexpected(other.to_string()),
        }
    }
}

impl ConfigArgs {
    pub fn run(self, path: &Path) -> Result<()> {
        if self.create {
            create(path)
        } else if self.open {
            open(path)
        } else {
            print(path)
        }
    }
}

fn create(path: &Path) -> Result<()> {
    if !path.exists() {
        config::write_default_at(path)
            .with_context(|| format!("failed to create '{}'", path.display()))?;
        println!("Create {}: {}", path.display().to_string().blue(), "file created".green());
        return Ok(());
    }

    let question = "Configuration file already exists, do you want to overwrite it?";
    let answer = prompt::confirm(question, &["y", "N"], &mut io::stdin().lock(), &mut io::stdout())
        .context("failed to read answer")?;

    match Overwrite::from_answer(&answer) {
        Overwrite::Yes => {
            config::write_default_at(path)
                .with_context(|| format!("failed to overwrite '{}'", path.display()))?;
            println!(
                "Create {}: {}",
                path.display().to_string().blue(),
                "file overwritten".green()
            );
        }
        Overwrite::No => {}
        Overwrite::Unexpected(answer) => {
            println!("{}", "-".repeat(question.len()));
            println!("{}: {answer}", "Unexpected answer".yellow());
        }
    }
    Ok(())
}

fn open(path: &Path) -> Result<()> {
    if !path.exists() {
        println!("{}", NOT_FOUND_MESSAGE.red());
        return Ok(());
    }
    editor::launch_editor(path)
        .with_context(|| format!("failed to open '{}'", path.display()))
}

fn print(path: &Path) -> Result<()> {
    if !path.exists() {
        println!("{}", NOT_FOUND_MESSAGE.red());
        return Ok(());
    }
    config::load_at(path).context("configuration file is invalid")?;
    let contents = config::read_raw_at(path)?;
    print!("{}", contents.blue());
    if !contents.ends_with('\n') {
        println!();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_map_to_actions() {
        assert_eq!(Overwrite::from_answer("y"), Overwrite::Yes);
        assert_eq!(Overwrite::from_answer("n"), Overwrite::No);
        assert_eq!(
            Overwrite::from_answer("maybe"),
            Overwrite::Unexpected("maybe".to_string())
        );
    }
}
