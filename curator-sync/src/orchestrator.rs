//! Rolling pull: every configured repository, one at a time, in order.
//!
//! Per repository: locate → (pull) → report → pacing sleep.
//!
//! Fatal failures (config, credential) happen before the first repository is
//! touched. Once the loop starts, each repository produces exactly one
//! report and nothing a repository does can stop the loop.

use std::io::Write;
use std::path::Path;
use std::thread;
use std::time::Duration;

use curator_core::{config, RemoteSource, RepositoryName, SyncConfig};

use crate::credential::Credential;
use crate::error::SyncError;
use crate::locator::{locate_path, RepositoryState, RepositoryTarget};
use crate::pull::pull;
use crate::report::{header_line, RepositoryOutcome, RepositoryReport};

/// Sleep after each report line so output scrolls at a readable pace.
pub const PACING_DELAY: Duration = Duration::from_millis(100);

/// Knobs for [`run_rolling_pull`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PullOptions {
    /// Blocking sleep after every report line.
    pub pacing: Duration,
    /// Emit ANSI colors.
    pub colored: bool,
}

impl Default for PullOptions {
    fn default() -> Self {
        Self {
            pacing: PACING_DELAY,
            colored: true,
        }
    }
}

/// Locate and (if possible) pull a single repository.
pub fn sync_repository(
    storage_root: &Path,
    name: &RepositoryName,
    credential: &Credential,
) -> RepositoryReport {
    let target = RepositoryTarget::new(storage_root, name.clone());
    let outcome = match locate_path(&target.local_path) {
        RepositoryState::Absent => {
            tracing::debug!("{}: absent", target.local_path.display());
            RepositoryOutcome::Missing
        }
        RepositoryState::PresentNotARepo => {
            tracing::debug!("{}: not a repository", target.local_path.display());
            RepositoryOutcome::NotARepository
        }
        RepositoryState::PresentValid(repo) => {
            tracing::debug!("{}: pulling", target.local_path.display());
            RepositoryOutcome::Pulled(pull(&repo, credential))
        }
    };
    RepositoryReport::new(target.name, outcome)
}

/// Run the loop over `sync.repository_names`.
///
/// `on_report` sees each report as soon as it is produced; an error from it
/// stops the loop and is returned. Returns all reports in configured order.
pub fn rolling_pull<E>(
    sync: &SyncConfig,
    credential: &Credential,
    pacing: Duration,
    mut on_report: impl FnMut(&RepositoryReport) -> Result<(), E>,
) -> Result<Vec<RepositoryReport>, E> {
    let mut reports = Vec::with_capacity(sync.repository_names.len());
    for name in &sync.repository_names {
        let report = sync_repository(&sync.storage_root, name, credential);
        on_report(&report)?;
        reports.push(report);
        if !pacing.is_zero() {
            thread::sleep(pacing);
        }
    }
    Ok(reports)
}

/// Entry point for `curator pull`, rooted at an explicit `home` for `~` expansion.
///
/// Loads the config at `config_path`, resolves the SSH key, writes the header
/// and one line per repository to `out`.
pub fn run_rolling_pull_at<W: Write>(
    config_path: &Path,
    source: RemoteSource,
    options: &PullOptions,
    home: &Path,
    out: &mut W,
) -> Result<Vec<RepositoryReport>, SyncError> {
    let config = config::load_at(config_path)?;
    let sync = SyncConfig::from_config_at(&config, source, home)?;
    let credential = Credential::resolve(&sync.ssh_key_path)?;

    tracing::info!(
        "pulling {} repositories from {}",
        sync.repository_names.len(),
        sync.storage_root.display()
    );

    writeln!(out, "{}", header_line(sync.remote_source)).map_err(SyncError::Output)?;
    writeln!(out).map_err(SyncError::Output)?;

    rolling_pull(&sync, &credential, options.pacing, |report| {
        if options.colored {
            writeln!(out, "{}", report.colored_line())?;
        } else {
            writeln!(out, "{report}")?;
        }
        out.flush()
    })
    .map_err(SyncError::Output)
}

/// `run_rolling_pull_at` convenience wrapper — uses `dirs::home_dir()`.
pub fn run_rolling_pull<W: Write>(
    config_path: &Path,
    source: RemoteSource,
    options: &PullOptions,
    out: &mut W,
) -> Result<Vec<RepositoryReport>, SyncError> {
    let home = dirs::home_dir().ok_or(curator_core::ConfigError::HomeNotFound)?;
    run_rolling_pull_at(config_path, source, options, &home, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pacing_is_a_tenth_of_a_second() {
        let options = PullOptions::default();
        assert_eq!(options.pacing, Duration::from_millis(100));
        assert!(options.colored);
    }
}
