//! Dispatch table from `(domain, service)` to a state transition.

use serde_json::Value;

use crate::entity::{Context, Entity, EntityState};
use crate::service::ServiceCall;
use crate::time::Timestamp;

/// Payload field carrying the requested light brightness.
pub const BRIGHTNESS: &str = "brightness";

/// Every transition the hub knows how to apply.
///
/// Matching is case-sensitive and exact. Anything not listed resolves to
/// [`Unhandled`](Self::Unhandled): the call is still accepted but nothing is
/// mutated.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceAction {
    /// `light.turn_on`, with the raw `brightness` value when present.
    LightTurnOn { brightness: Option<Value> },
    /// `light.turn_off`.
    LightTurnOff,
    /// `switch.turn_on`.
    SwitchTurnOn,
    /// `switch.turn_off`.
    SwitchTurnOff,
    /// Any other `(domain, service)` pair.
    Unhandled,
}

impl ServiceAction {
    /// Pick the transition for a validated call.
    #[must_use]
    pub fn resolve(call: &ServiceCall) -> Self {
        match (call.domain(), call.service()) {
            ("light", "turn_on") => Self::LightTurnOn {
                brightness: call.field(BRIGHTNESS).cloned(),
            },
            ("light", "turn_off") => Self::LightTurnOff,
            ("switch", "turn_on") => Self::SwitchTurnOn,
            ("switch", "turn_off") => Self::SwitchTurnOff,
            _ => Self::Unhandled,
        }
    }

    /// Whether applying this action mutates anything.
    #[must_use]
    pub fn is_handled(&self) -> bool {
        !matches!(self, Self::Unhandled)
    }

    /// Apply the transition to `entity`.
    ///
    /// Handled actions always stamp both timestamps and replace the context,
    /// whether or not the state actually differs. `brightness` is copied
    /// through as-is.
    pub fn apply(&self, entity: &mut Entity, ts: Timestamp, context: &Context) {
        let new_state = match self {
            Self::LightTurnOn { brightness } => {
                if let Some(value) = brightness {
                    entity.set_attribute(BRIGHTNESS, value.clone());
                }
                EntityState::On
            }
            Self::SwitchTurnOn => EntityState::On,
            Self::LightTurnOff | Self::SwitchTurnOff => EntityState::Off,
            Self::Unhandled => return,
        };
        entity.update_state(new_state, ts, context.clone());
    }
}
