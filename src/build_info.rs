//! Build metadata embedded by build.rs

use std::fmt;

use serde::Serialize;

/// Name, version and build stamp of this binary
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    /// Missing when built without build.rs (e.g. some IDE checks)
    pub build_number: Option<u64>,
    pub built_at: Option<&'static str>,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            build_number: option_env!("PANSCALE_BUILD_NUMBER").and_then(|s| s.parse().ok()),
            built_at: option_env!("PANSCALE_BUILD_TIMESTAMP"),
        }
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.version)?;
        match (self.build_number, self.built_at) {
            (Some(n), Some(at)) => write!(f, " (build {}, {})", n, at),
            (Some(n), None) => write!(f, " (build {})", n),
            _ => Ok(()),
        }
    }
}
