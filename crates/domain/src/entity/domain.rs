//! Entity domains: the `light` in `light.living_room`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Domains the hub knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Light,
    Switch,
    Sensor,
    BinarySensor,
    Automation,
}

impl Domain {
    /// Every known domain, in the order the hub advertises them.
    pub const ALL: [Self; 5] = [
        Self::Light,
        Self::Switch,
        Self::Sensor,
        Self::BinarySensor,
        Self::Automation,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Switch => "switch",
            Self::Sensor => "sensor",
            Self::BinarySensor => "binary_sensor",
            Self::Automation => "automation",
        }
    }

    /// Split `<domain>.<object_id>` and resolve the domain part.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidEntityId`] when either part is empty
    /// or the dot is missing, and [`ValidationError::UnknownDomain`] when the
    /// prefix is not a known domain.
    pub fn from_entity_id(entity_id: &str) -> Result<Self, ValidationError> {
        match entity_id.split_once('.') {
            Some((domain, object_id)) if !domain.is_empty() && !object_id.is_empty() => {
                domain.parse()
            }
            _ => Err(ValidationError::InvalidEntityId(entity_id.to_string())),
        }
    }
}

impl FromStr for Domain {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|domain| domain.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownDomain(s.to_string()))
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
