//! System config: static hub metadata served by `GET /api/config`.

use serde::{Deserialize, Serialize};

use crate::entity::Domain;

/// Snapshot of hub metadata, assembled once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemConfig {
    pub location_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: i64,
    pub unit_system: UnitSystem,
    pub timezone: String,
    pub components: Vec<String>,
    pub config_dir: String,
    pub version: String,
}

/// Units the hub reports measurements in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitSystem {
    pub length: String,
    pub mass: String,
    pub temperature: String,
    pub volume: String,
}

impl SystemConfig {
    /// Hub version reported when none is configured.
    pub const DEFAULT_VERSION: &'static str = "2026.2.1";
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            location_name: "Mock Home".to_string(),
            latitude: 40.4168,
            longitude: -3.7038,
            elevation: 667,
            unit_system: UnitSystem::default(),
            timezone: "Europe/Madrid".to_string(),
            components: Domain::ALL
                .iter()
                .map(|domain| domain.as_str().to_string())
                .collect(),
            config_dir: "/config".to_string(),
            version: Self::DEFAULT_VERSION.to_string(),
        }
    }
}

impl Default for UnitSystem {
    fn default() -> Self {
        Self {
            length: "m".to_string(),
            mass: "kg".to_string(),
            temperature: "\u{b0}C".to_string(),
            volume: "L".to_string(),
        }
    }
}
