//! TOML configuration file.
//!
//! # Layout
//!
//! ```toml
//! [ssh]
//! rsa_file = "~/.ssh/id_rsa"
//!
//! [storage]
//! path = "~/Documents/Repos"
//!
//! [git]
//! repos = ["curator", "dotfiles"]
//! ```
//!
//! # API pattern
//!
//! Functions taking an explicit path or directory carry an `_at` suffix and
//! are the ones used in tests; the bare forms derive the location from
//! `dirs::config_dir()` / `dirs::home_dir()` and delegate.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{io_err, ConfigError};

/// Directory name under the platform config dir.
pub const CONFIG_DIR_NAME: &str = "curator";
/// File name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

/// `[ssh]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SshConfig {
    /// Private key used to authenticate against every remote.
    pub rsa_file: String,
}

/// `[storage]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory containing the local mirrors.
    pub path: String,
}

/// `[git]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitConfig {
    /// Repository names, pulled in this order.
    pub repos: Vec<String>,
}

/// Root of the configuration file. Every table is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub ssh: SshConfig,
    pub storage: StorageConfig,
    pub git: GitConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ssh: SshConfig {
                rsa_file: "~/.ssh/id_rsa".to_string(),
            },
            storage: StorageConfig {
                path: "~/Documents/Repos".to_string(),
            },
            git: GitConfig { repos: Vec::new() },
        }
    }
}

// ---------------------------------------------------------------------------
// 1. Path helpers
// ---------------------------------------------------------------------------

/// `<config_dir>/curator/config.toml` — pure, no I/O.
pub fn config_path_at(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
}

/// Default configuration file location (uses `dirs::config_dir()`).
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let dir = dirs::config_dir().ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(config_path_at(&dir))
}

/// Expand a leading `~` or `~/` against `home`. Other paths pass through.
pub fn expand_tilde_at(raw: &str, home: &Path) -> PathBuf {
    if raw == "~" {
        return home.to_path_buf();
    }
    match raw.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None => PathBuf::from(raw),
    }
}

// ---------------------------------------------------------------------------
// 2. Load
// ---------------------------------------------------------------------------

/// Read the raw text of the configuration file at `path`.
///
/// Returns `ConfigError::NotFound` if absent.
pub fn read_raw_at(path: &Path) -> Result<String, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        });
    }
    std::fs::read_to_string(path).map_err(|e| io_err(path, e))
}

/// Load and validate the configuration file at `path`.
///
/// Returns `ConfigError::NotFound` if absent,
/// `ConfigError::Parse` (with path + line context) if malformed or missing keys.
pub fn load_at(path: &Path) -> Result<Config, ConfigError> {
    let contents = read_raw_at(path)?;
    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// 3. Save (atomic)
// ---------------------------------------------------------------------------

/// Atomically write `config` to `path`.
///
/// Write flow: serialize → `.toml.tmp` sibling → `chmod 0600` → `rename`.
/// Parent directories are created as needed.
pub fn save_at(path: &Path, config: &Config) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
        }
    }

    let contents = toml::to_string_pretty(config)?;
    let tmp_path = tmp_sibling(path);
    std::fs::write(&tmp_path, contents).map_err(|e| io_err(&tmp_path, e))?;
    set_file_permissions(&tmp_path)?;
    if let Err(e) = std::fs::rename(&tmp_path, path) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(io_err(path, e));
    }
    Ok(())
}

/// Write [`Config::default`] to `path`, replacing any existing file.
pub fn write_default_at(path: &Path) -> Result<Config, ConfigError> {
    let config = Config::default();
    save_at(path, &config)?;
    tracing::debug!("wrote default configuration to {}", path.display());
    Ok(config)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn tmp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| CONFIG_FILE_NAME.to_string());
    path.with_file_name(format!("{name}.tmp"))
}

#[cfg(unix)]
fn set_file_permissions(path: &Path) -> Result<(), ConfigError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
        .map_err(|e| io_err(path, e))
}
#[cfg(not(unix))]
fn set_file_permissions(_path: &Path) -> Result<(), ConfigError> {
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
