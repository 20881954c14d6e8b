//! Entity state: the current operational state of an entity.

use serde::{Deserialize, Serialize};

/// Current state of an entity, always serialized as a plain string.
///
/// Binary devices use the well-known variants; sensors report arbitrary
/// readings (`"22.5"`, `"45"`) which land in [`Other`](Self::Other).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntityState {
    On,
    Off,
    #[default]
    Unknown,
    Unavailable,
    Other(String),
}

impl EntityState {
    /// String form as exposed over the API.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::On => "on",
            Self::Off => "off",
            Self::Unknown => "unknown",
            Self::Unavailable => "unavailable",
            Self::Other(value) => value,
        }
    }
}

impl From<String> for EntityState {
    fn from(value: String) -> Self {
        match value.as_str() {
            "on" => Self::On,
            "off" => Self::Off,
            "unknown" => Self::Unknown,
            "unavailable" => Self::Unavailable,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for EntityState {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<EntityState> for String {
    fn from(state: EntityState) -> Self {
        match state {
            EntityState::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for EntityState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
