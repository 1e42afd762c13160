//! Error types for curator-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while loading or writing the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file did not exist at the expected path.
    #[error("configuration file not found at {path}")]
    NotFound { path: PathBuf },

    /// Underlying I/O failure, annotated with the path being accessed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parse error on load — includes the file path and toml's line context.
    #[error("failed to parse configuration at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// TOML serialization error (write path).
    #[error("TOML serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A required value was present but empty.
    #[error("configuration key `{key}` must not be empty")]
    EmptyValue { key: &'static str },

    /// `dirs::home_dir()` returned `None` — cannot expand `~` paths.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,

    /// `dirs::config_dir()` returned `None` — cannot locate the default config file.
    #[error("cannot determine configuration directory; pass --config explicitly")]
    ConfigDirNotFound,
}

/// Convenience constructor for [`ConfigError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> ConfigError {
    ConfigError::Io {
        path: path.into(),
        source,
    }
}
