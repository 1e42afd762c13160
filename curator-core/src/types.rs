//! Domain types shared by the sync engine and the CLI.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem paths.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::{expand_tilde_at, Config};
use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed name for a repository listed under `git.repos`.
///
/// The name doubles as the directory name below the storage root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepositoryName(pub String);

impl fmt::Display for RepositoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for RepositoryName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RepositoryName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl AsRef<Path> for RepositoryName {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// The hosting service the mirrored repositories come from.
///
/// Only shown in the pull header; it never changes how a pull is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RemoteSource {
    #[default]
    Github,
    Gitea,
}

impl fmt::Display for RemoteSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteSource::Github => write!(f, "github"),
            RemoteSource::Gitea => write!(f, "gitea"),
        }
    }
}

impl FromStr for RemoteSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "github" => Ok(Self::Github),
            "gitea" => Ok(Self::Gitea),
            other => Err(format!(
                "unknown remote source '{other}'; expected: github, gitea"
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Sync run settings
// ---------------------------------------------------------------------------

/// Settings for a single rolling pull, resolved from [`Config`].
///
/// Built once at the start of a run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Absolute path to the SSH private key (`ssh.rsa_file`).
    pub ssh_key_path: PathBuf,
    /// Directory holding one checkout per repository (`storage.path`).
    pub storage_root: PathBuf,
    /// Repositories to pull, in configured order (`git.repos`).
    pub repository_names: Vec<RepositoryName>,
    pub remote_source: RemoteSource,
}

impl SyncConfig {
    /// Resolve run settings, expanding `~` against `home`.
    pub fn from_config_at(
        config: &Config,
        remote_source: RemoteSource,
        home: &Path,
    ) -> Result<Self, ConfigError> {
        if config.ssh.rsa_file.trim().is_empty() {
            return Err(ConfigError::EmptyValue { key: "ssh.rsa_file" });
        }
        if config.storage.path.trim().is_empty() {
            return Err(ConfigError::EmptyValue { key: "storage.path" });
        }

        Ok(Self {
            ssh_key_path: expand_tilde_at(&config.ssh.rsa_file, home),
            storage_root: expand_tilde_at(&config.storage.path, home),
            repository_names: config
                .git
                .repos
                .iter()
                .map(|name| RepositoryName::from(name.as_str()))
                .collect(),
            remote_source,
        })
    }

    /// `from_config_at` convenience wrapper — uses `dirs::home_dir()`.
    pub fn from_config(config: &Config, remote_source: RemoteSource) -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeNotFound)?;
        Self::from_config_at(config, remote_source, &home)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
