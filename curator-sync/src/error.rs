//! Error types for curator-sync.

use std::path::PathBuf;

use thiserror::Error;

use curator_core::ConfigError;

/// Failures while turning `ssh.rsa_file` into a usable credential.
///
/// Always fatal to the run.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// The key file is missing or unreadable.
    #[error("cannot read SSH key {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file does not decode as an SSH private key.
    #[error("{path} does not contain a supported SSH private key: {source}")]
    UnsupportedKey {
        path: PathBuf,
        #[source]
        source: russh_keys::Error,
    },

    /// The key is passphrase-protected.
    #[error("SSH key {path} is encrypted; passphrase-protected keys are not supported")]
    Encrypted { path: PathBuf },
}

/// Per-repository pull failure.
///
/// Never escapes the pull executor: it is rendered into
/// [`PullOutcome::Failed`](crate::pull::PullOutcome::Failed).
#[derive(Debug, Error)]
pub enum PullError {
    /// HEAD does not point at a local branch.
    #[error("HEAD is detached; check out a branch before pulling")]
    DetachedHead,

    /// Local and remote histories have diverged.
    #[error("non-fast-forward update for branch {branch}")]
    NonFastForward { branch: String },

    /// Anything libgit2 reports (network, auth, checkout conflicts, ...).
    #[error("{}", .0.message())]
    Git(#[from] git2::Error),
}

/// Errors that abort a whole rolling pull.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Configuration could not be loaded or resolved.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// The SSH identity could not be loaded.
    #[error("credential error: {0}")]
    Credential(#[from] CredentialError),

    /// Writing report lines failed (e.g. closed stdout).
    #[error("failed to write report: {0}")]
    Output(#[source] std::io::Error),
}
