//! Curator core library — configuration, domain types, build metadata, errors.
//!
//! - [`config`] — TOML configuration load / save
//! - [`types`] — newtypes and the resolved [`SyncConfig`]
//! - [`build_info`] — [`BuildInfo`] for the `version` command
//! - [`error`] — [`ConfigError`]

pub mod build_info;
pub mod config;
pub mod error;
pub mod types;

pub use build_info::BuildInfo;
pub use config::Config;
pub use error::ConfigError;
pub use types::{RemoteSource, RepositoryName, SyncConfig};
