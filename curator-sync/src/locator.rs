//! Local repository discovery under the storage root.
//!
//! Inspection only: nothing here touches the network or writes to disk.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use git2::Repository;

use curator_core::RepositoryName;

/// One configured repository and where its mirror is expected to live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryTarget {
    pub name: RepositoryName,
    /// `<storage_root>/<name>`, always inside `storage_root`.
    pub local_path: PathBuf,
}

impl RepositoryTarget {
    pub fn new(storage_root: &Path, name: RepositoryName) -> Self {
        let local_path = local_path_for(storage_root, &name);
        Self { name, local_path }
    }
}

/// Join `name` onto `storage_root` keeping only its plain segments.
///
/// Root, prefix and `..` components are dropped, so `/etc` maps to
/// `<storage_root>/etc` rather than replacing the root.
pub fn local_path_for(storage_root: &Path, name: &RepositoryName) -> PathBuf {
    let mut path = storage_root.to_path_buf();
    for component in Path::new(&name.0).components() {
        if let Component::Normal(segment) = component {
            path.push(segment);
        }
    }
    path
}

/// What was found at a target's local path.
pub enum RepositoryState {
    /// Nothing exists at the path.
    Absent,
    /// Something exists but it is not a git repository.
    PresentNotARepo,
    /// An opened repository, ready to pull.
    PresentValid(Repository),
}

impl fmt::Debug for RepositoryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryState::Absent => f.write_str("Absent"),
            RepositoryState::PresentNotARepo => f.write_str("PresentNotARepo"),
            RepositoryState::PresentValid(repo) => {
                f.debug_tuple("PresentValid").field(&repo.path()).finish()
            }
        }
    }
}

/// Classify `<storage_root>/<name>`.
pub fn locate(storage_root: &Path, name: &RepositoryName) -> RepositoryState {
    locate_path(&local_path_for(storage_root, name))
}

/// Classify an explicit path.
///
/// `Repository::open` is used rather than `discover` so a plain folder nested
/// inside some other checkout is still reported as not a repository.
pub fn locate_path(path: &Path) -> RepositoryState {
    if !path.exists() {
        return RepositoryState::Absent;
    }
    match Repository::open(path) {
        Ok(repo) => RepositoryState::PresentValid(repo),
        Err(err) => {
            tracing::debug!("{} is not a repository: {}", path.display(), err.message());
            RepositoryState::PresentNotARepo
        }
    }
}
