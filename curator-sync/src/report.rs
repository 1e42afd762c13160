//! Per-repository report lines.
//!
//! ```text
//! Pull changes from github remote repository
//!
//! ▶ Pulling proj1: Already up-to-date
//! ▶ Pulling proj2: a1b2c3 --> d4e5f6
//! ✗ Pulling proj3: Folder is not a local repository
//! ✗ Pulling proj4: The local repository does not exist
//! ▶ Pulling proj5: <error message>
//! ```

use std::fmt;

use colored::Colorize;
use git2::Oid;

use curator_core::{RemoteSource, RepositoryName};

use crate::pull::PullOutcome;

/// Marker for repositories a pull was attempted on.
pub const MARKER_PULLED: &str = "▶";
/// Marker for repositories skipped before any network access.
pub const MARKER_SKIPPED: &str = "✗";

/// Number of hex characters shown for a commit id.
pub const SHORT_ID_LEN: usize = 6;

pub const UP_TO_DATE_MESSAGE: &str = "Already up-to-date";
pub const NOT_A_REPO_MESSAGE: &str = "Folder is not a local repository";
pub const MISSING_MESSAGE: &str = "The local repository does not exist";

/// `Pull changes from <label> remote repository`
pub fn header_line(source: RemoteSource) -> String {
    format!("Pull changes from {source} remote repository")
}

/// Outcome for one configured repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryOutcome {
    /// Local path does not exist.
    Missing,
    /// Local path exists but is not a repository.
    NotARepository,
    /// A pull was attempted.
    Pulled(PullOutcome),
}

/// One report line: a repository name and what happened to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryReport {
    pub name: RepositoryName,
    pub outcome: RepositoryOutcome,
}

impl RepositoryReport {
    pub fn new(name: RepositoryName, outcome: RepositoryOutcome) -> Self {
        Self { name, outcome }
    }

    pub fn marker(&self) -> &'static str {
        match self.outcome {
            RepositoryOutcome::Pulled(_) => MARKER_PULLED,
            RepositoryOutcome::Missing | RepositoryOutcome::NotARepository => MARKER_SKIPPED,
        }
    }

    /// Text after `Pulling <name>: `.
    pub fn message(&self) -> String {
        match &self.outcome {
            RepositoryOutcome::Missing => MISSING_MESSAGE.to_string(),
            RepositoryOutcome::NotARepository => NOT_A_REPO_MESSAGE.to_string(),
            RepositoryOutcome::Pulled(PullOutcome::AlreadyUpToDate) => {
                UP_TO_DATE_MESSAGE.to_string()
            }
            RepositoryOutcome::Pulled(PullOutcome::Advanced { from, to }) => {
                format!("{} --> {}", short_id(*from), short_id(*to))
            }
            RepositoryOutcome::Pulled(PullOutcome::Failed(detail)) => detail.clone(),
        }
    }

    /// The line with terminal colors applied.
    ///
    /// `colored` honours `NO_COLOR` / `CLICOLOR_FORCE` on its own.
    pub fn colored_line(&self) -> String {
        let marker = match self.outcome {
            RepositoryOutcome::Pulled(_) => self.marker().cyan().bold(),
            _ => self.marker().red().bold(),
        };
        let message = match &self.outcome {
            RepositoryOutcome::Pulled(PullOutcome::Failed(_)) => self.message().red(),
            RepositoryOutcome::Pulled(PullOutcome::Advanced { .. }) => self.message().green(),
            RepositoryOutcome::Pulled(PullOutcome::AlreadyUpToDate) => self.message().normal(),
            _ => self.message().yellow(),
        };
        format!("{marker} Pulling {}: {message}", self.name.0.bold())
    }
}

impl fmt::Display for RepositoryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Pulling {}: {}", self.marker(), self.name, self.message())
    }
}

/// First [`SHORT_ID_LEN`] hex characters of `oid`.
pub fn short_id(oid: Oid) -> String {
    let mut hex = oid.to_string();
    hex.truncate(SHORT_ID_LEN);
    hex
}
