//! Entity: the central state-holding concept of the hub.
//!
//! An entity represents a single observable/controllable aspect of a device
//! (a light's on/off state, a temperature sensor's reading, …). It is keyed by
//! an `entity_id` of the form `<domain>.<object_id>` which never changes once
//! the entity exists.

mod context;
mod domain;
mod state;

pub use context::Context;
pub use domain::Domain;
pub use state::EntityState;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{MockError, ValidationError};
use crate::id::ContextId;
use crate::time::{Timestamp, now};

/// Attribute key every entity carries.
pub const FRIENDLY_NAME: &str = "friendly_name";

/// A state holder exposed by the hub.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub entity_id: String,
    pub state: EntityState,
    pub attributes: Map<String, Value>,
    pub last_changed: Timestamp,
    pub last_updated: Timestamp,
    pub context: Context,
}

impl Entity {
    /// Create a builder for constructing an [`Entity`].
    #[must_use]
    pub fn builder() -> EntityBuilder {
        EntityBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`MockError::Validation`] when `entity_id` is malformed, names
    /// an unknown domain, or when the `friendly_name` attribute is missing.
    pub fn validate(&self) -> Result<(), MockError> {
        Domain::from_entity_id(&self.entity_id)?;
        if self.friendly_name().is_none() {
            return Err(ValidationError::MissingFriendlyName(self.entity_id.clone()).into());
        }
        Ok(())
    }

    /// Human-readable name taken from the `friendly_name` attribute.
    #[must_use]
    pub fn friendly_name(&self) -> Option<&str> {
        self.attributes.get(FRIENDLY_NAME).and_then(Value::as_str)
    }

    /// Look up a single attribute.
    #[must_use]
    pub fn get_attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Insert or replace an attribute, returning the previous value.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.attributes.insert(key.into(), value)
    }

    /// Set a new state and record the mutation.
    ///
    /// `last_changed` is stamped even when `new_state` equals the current
    /// state; the hub does not do change detection on service calls.
    pub fn update_state(&mut self, new_state: EntityState, ts: Timestamp, context: Context) {
        self.state = new_state;
        self.last_changed = ts;
        self.last_updated = ts;
        self.context = context;
    }
}

/// Step-by-step builder for [`Entity`].
#[derive(Debug, Default)]
pub struct EntityBuilder {
    entity_id: Option<String>,
    state: Option<EntityState>,
    attributes: Map<String, Value>,
    last_changed: Option<Timestamp>,
    last_updated: Option<Timestamp>,
    context_id: Option<ContextId>,
}

impl EntityBuilder {
    #[must_use]
    pub fn entity_id(mut self, entity_id: impl Into<String>) -> Self {
        self.entity_id = Some(entity_id.into());
        self
    }

    #[must_use]
    pub fn state(mut self, state: impl Into<EntityState>) -> Self {
        self.state = Some(state.into());
        self
    }

    #[must_use]
    pub fn friendly_name(self, name: impl Into<String>) -> Self {
        self.attribute(FRIENDLY_NAME, Value::String(name.into()))
    }

    #[must_use]
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Set both `last_changed` and `last_updated`.
    #[must_use]
    pub fn timestamp(mut self, ts: Timestamp) -> Self {
        self.last_changed = Some(ts);
        self.last_updated = Some(ts);
        self
    }

    #[must_use]
    pub fn context_id(mut self, id: impl Into<ContextId>) -> Self {
        self.context_id = Some(id.into());
        self
    }

    /// Consume the builder, validate, and return an [`Entity`].
    ///
    /// Missing timestamps default to now, a missing context id to a random one.
    ///
    /// # Errors
    ///
    /// Returns [`MockError::Validation`] if the result breaks an entity invariant.
    pub fn build(self) -> Result<Entity, MockError> {
        let ts = now();
        let entity = Entity {
            entity_id: self.entity_id.unwrap_or_default(),
            state: self.state.unwrap_or_default(),
            attributes: self.attributes,
            last_changed: self.last_changed.unwrap_or(ts),
            last_updated: self.last_updated.unwrap_or(ts),
            context: Context::new(self.context_id.unwrap_or_else(ContextId::random)),
        };
        entity.validate()?;
        Ok(entity)
    }
}
