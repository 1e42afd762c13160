//! Program and build metadata.
//!
//! The version comes from the workspace manifest via `CARGO_PKG_VERSION`.
//! Commit hash, build time and builder are injected by the build environment
//! through `CURATOR_GIT_COMMIT`, `CURATOR_BUILD_TIME` and `CURATOR_BUILT_BY`;
//! each falls back to `unknown`.

use std::fmt;

const UNKNOWN: &str = "unknown";

/// Immutable description of the running binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub git_commit: &'static str,
    pub build_time: &'static str,
    pub built_by: &'static str,
}

impl BuildInfo {
    /// Metadata captured when this crate was compiled.
    pub const fn current() -> Self {
        Self {
            name: "curator",
            version: env!("CARGO_PKG_VERSION"),
            git_commit: or_unknown(option_env!("CURATOR_GIT_COMMIT")),
            build_time: or_unknown(option_env!("CURATOR_BUILD_TIME")),
            built_by: or_unknown(option_env!("CURATOR_BUILT_BY")),
        }
    }

    /// `v<version>`, as printed by `curator version --only`.
    pub fn version_tag(&self) -> String {
        format!("v{}", self.version)
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} version: {}", self.name, self.version_tag())?;
        writeln!(f, "Git commit hash: {}", self.git_commit)?;
        writeln!(f, "Built on: {}", self.build_time)?;
        write!(f, "Built by: {}", self.built_by)
    }
}

const fn or_unknown(value: Option<&'static str>) -> &'static str {
    match value {
        Some(v) => v,
        None => UNKNOWN,
    }
}
