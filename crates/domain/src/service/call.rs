//! Validated service call and its response.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::entity::Context;

/// A service call that passed validation.
///
/// Only [`validate_service_call`](super::validate_service_call) builds one,
/// so `entity_id` is always a non-empty string. Whether it names an existing
/// entity is not checked.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceCall {
    domain: String,
    service: String,
    entity_id: String,
    service_data: Map<String, Value>,
}

impl ServiceCall {
    pub(crate) fn new(
        domain: String,
        service: String,
        entity_id: String,
        service_data: Map<String, Value>,
    ) -> Self {
        Self {
            domain,
            service,
            entity_id,
            service_data,
        }
    }

    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    #[must_use]
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Target entity named by `service_data.entity_id`.
    #[must_use]
    pub fn entity_id(&self) -> &str {
        &self.entity_id
    }

    /// Look up one payload field, `entity_id` included.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.service_data.get(key)
    }
}

/// Body returned for every accepted service call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceResponse {
    pub context: Context,
}
