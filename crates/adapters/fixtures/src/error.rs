//! Fixture loading errors.

use std::path::PathBuf;

use hamock_domain::error::MockError;

/// Errors raised while loading seed data.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    /// The fixture file could not be read.
    #[error("failed to read fixture file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The fixture file is not valid JSON or a record is malformed.
    #[error("failed to parse fixture file")]
    Parse(#[from] serde_json::Error),

    /// The top-level JSON value is neither an object nor an array.
    #[error("fixture must be an object keyed by entity id or an array of entities")]
    Shape,

    /// An object key disagrees with the record it points to.
    #[error("fixture key {key} does not match entity_id {entity_id}")]
    KeyMismatch { key: String, entity_id: String },

    /// A seed entity breaks an entity invariant.
    #[error("invalid seed entity")]
    Invalid(#[from] MockError),
}
