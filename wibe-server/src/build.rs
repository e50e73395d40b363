use serde::Serialize;
use wibe_protocol::WIBE_PROTOCOL_VERSION;

/// Git and build metadata captured by the build script.
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub git_sha: &'static str,
    pub git_branch: &'static str,
    pub git_describe: &'static str,
    pub git_commit_date: &'static str,
    pub git_dirty: &'static str,
    pub build_timestamp: &'static str,
}

impl BuildInfo {
    pub fn gather() -> Self {
        Self {
            git_sha: option_env!("VERGEN_GIT_SHA").unwrap_or("unknown"),
            git_branch: option_env!("VERGEN_GIT_BRANCH").unwrap_or("unknown"),
            git_describe: option_env!("VERGEN_GIT_DESCRIBE").unwrap_or("unknown"),
            git_commit_date: option_env!("VERGEN_GIT_COMMIT_DATE").unwrap_or_default(),
            git_dirty: option_env!("VERGEN_GIT_DIRTY").unwrap_or("false"),
            build_timestamp: option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VersionInfo {
    pub version: &'static str,
    pub protocol_version: &'static str,
    pub build: BuildInfo,
}

impl VersionInfo {
    pub fn gather() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            protocol_version: WIBE_PROTOCOL_VERSION,
            build: BuildInfo::gather(),
        }
    }
}
