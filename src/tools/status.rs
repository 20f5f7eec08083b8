//! Status Tool
//!
//! Build information and the fixed rules the scaler applies.

use serde::Serialize;

use crate::build_info::BuildInfo;
use crate::scaling::{UnitSystem, NON_SCALABLE_UNITS};

/// Unit system with its toggle label
#[derive(Debug, Serialize)]
pub struct UnitSystemInfo {
    pub system: UnitSystem,
    pub label: &'static str,
}

/// Response for get_status
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub build: BuildInfo,
    pub unit_systems: Vec<UnitSystemInfo>,
    pub non_scalable_units: Vec<&'static str>,
    pub checked_at: String,
}

pub fn get_status() -> StatusResponse {
    let unit_systems = [UnitSystem::Metric, UnitSystem::UsCustomary]
        .into_iter()
        .map(|system| UnitSystemInfo {
            system,
            label: system.label(),
        })
        .collect();

    StatusResponse {
        build: BuildInfo::current(),
        unit_systems,
        non_scalable_units: NON_SCALABLE_UNITS.to_vec(),
        checked_at: chrono::Utc::now().to_rfc3339(),
    }
}
