//! Fetch + fast-forward of a single repository.
//!
//! ## `pull` — steps
//!
//! 1. Resolve the branch HEAD points at (detached HEAD fails).
//! 2. Resolve its upstream remote and merge ref (`origin` / same name by default).
//! 3. Fetch that ref with the run's credential.
//! 4. Analyse `FETCH_HEAD` against the branch tip.
//! 5. Up to date → done. Fast-forward → safe checkout of the new tree, then
//!    move the branch ref. Anything else fails.

use git2::{build::CheckoutBuilder, FetchOptions, Oid, Repository};

use crate::credential::Credential;
use crate::error::PullError;

/// Remote used when the branch has no `branch.<name>.remote` entry.
pub const DEFAULT_REMOTE: &str = "origin";

/// Result of pulling one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PullOutcome {
    /// The remote had nothing new.
    AlreadyUpToDate,
    /// The branch moved from `from` to `to`. `from` is the zero id when the
    /// local branch had no commits yet.
    Advanced { from: Oid, to: Oid },
    /// Human-readable cause. Not retried.
    Failed(String),
}

impl PullOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, PullOutcome::Failed(_))
    }
}

/// Pull the current branch of `repo`, authenticating with `credential`.
///
/// Never returns an error: failures are folded into [`PullOutcome::Failed`].
pub fn pull(repo: &Repository, credential: &Credential) -> PullOutcome {
    match try_pull(repo, credential) {
        Ok(outcome) => outcome,
        Err(err) => {
            tracing::warn!("pull failed for {}: {err}", repo.path().display());
            PullOutcome::Failed(err.to_string())
        }
    }
}

fn try_pull(repo: &Repository, credential: &Credential) -> Result<PullOutcome, PullError> {
    // Step 1: current branch (may be unborn).
    let head = repo.find_reference("HEAD")?;
    let branch_ref = head
        .symbolic_target()
        .filter(|target| target.starts_with("refs/heads/"))
        .ok_or(PullError::DetachedHead)?
        .to_string();
    let branch = branch_ref.trim_start_matches("refs/heads/").to_string();
    let from = repo.refname_to_id(&branch_ref).ok();

    // Step 2: upstream configuration.
    let remote_name = repo
        .branch_upstream_remote(&branch_ref)
        .ok()
        .and_then(|buf| buf.as_str().map(str::to_owned))
        .unwrap_or_else(|| DEFAULT_REMOTE.to_string());
    let merge_ref = repo
        .config()?
        .get_string(&format!("branch.{branch}.merge"))
        .unwrap_or_else(|_| branch_ref.clone());

    // Step 3: fetch.
    let mut remote = repo.find_remote(&remote_name)?;
    let mut options = FetchOptions::new();
    options.remote_callbacks(credential.remote_callbacks());
    tracing::debug!("fetching {merge_ref} from {remote_name}");
    remote.fetch(&[merge_ref.as_str()], Some(&mut options), None)?;

    // Step 4: analysis.
    let fetch_head = repo.find_reference("FETCH_HEAD")?;
    let fetched = repo.reference_to_annotated_commit(&fetch_head)?;
    let to = fetched.id();
    let (analysis, _) = repo.merge_analysis(&[&fetched])?;

    if analysis.is_up_to_date() {
        return Ok(PullOutcome::AlreadyUpToDate);
    }
    if !(analysis.is_fast_forward() || analysis.is_unborn()) {
        return Err(PullError::NonFastForward { branch });
    }

    // Step 5: fast-forward. Checkout first so local edits that would be
    // clobbered abort the pull before the ref moves.
    let target = repo.find_commit(to)?;
    repo.checkout_tree(target.as_object(), Some(CheckoutBuilder::new().safe()))?;
    let message = format!("pull: fast-forward {branch} to {to}");
    match from {
        Some(_) => {
            repo.find_reference(&branch_ref)?.set_target(to, &message)?;
        }
        None => {
            repo.reference(&branch_ref, to, false, &message)?;
        }
    }
    repo.set_head(&branch_ref)?;

    let from = from.unwrap_or_else(Oid::zero);
    tracing::info!("{branch}: {from} -> {to}");
    Ok(PullOutcome::Advanced { from, to })
}
