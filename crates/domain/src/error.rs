//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`MockError`]
//! via `#[from]`.

/// Root error type for domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum MockError {
    /// Input or seed data broke a domain invariant.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A lookup by key found nothing.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// A request payload could not be decoded as JSON.
    #[error(transparent)]
    Payload(#[from] serde_json::Error),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The service payload is not a JSON object.
    #[error("Expected object, received {received}")]
    InvalidServiceData {
        /// JSON kind that was received instead (`null`, `array`, …).
        received: &'static str,
    },

    /// The service payload lacks a usable `entity_id`.
    #[error("entity_id is required")]
    MissingEntityId,

    /// The entity id is not of the form `<domain>.<object_id>`.
    #[error("invalid entity id {0:?}, expected <domain>.<object_id>")]
    InvalidEntityId(String),

    /// The entity id prefix names a domain the hub does not know.
    #[error("unknown domain {0:?}")]
    UnknownDomain(String),

    /// The entity has no `friendly_name` attribute.
    #[error("entity {0} has no friendly_name attribute")]
    MissingFriendlyName(String),

    /// Two seed records share the same entity id.
    #[error("duplicate entity id {0}")]
    DuplicateEntityId(String),
}

/// Lookup miss.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Kind of thing looked up (`Entity`).
    pub entity: &'static str,
    /// Key that was requested, verbatim.
    pub id: String,
}
