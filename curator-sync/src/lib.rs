//! # curator-sync
//!
//! Rolling pull of the repositories listed in the curator configuration.
//!
//! Call [`run_rolling_pull`] to load the config, resolve the SSH key and pull
//! every repository in order, or compose [`Credential::resolve`],
//! [`locate`] and [`pull`] directly.

pub mod credential;
pub mod error;
pub mod locator;
pub mod orchestrator;
pub mod pull;
pub mod report;

pub use credential::Credential;
pub use error::{CredentialError, PullError, SyncError};
pub use locator::{locate, RepositoryState, RepositoryTarget};
pub use orchestrator::{
    rolling_pull, run_rolling_pull, run_rolling_pull_at, sync_repository, PullOptions,
    PACING_DELAY,
};
pub use pull::{pull, PullOutcome};
pub use report::{header_line, RepositoryOutcome, RepositoryReport};
