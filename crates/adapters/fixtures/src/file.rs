//! JSON fixture files.
//!
//! Two layouts are accepted:
//!
//! ```json
//! { "light.porch": { "entity_id": "light.porch", "state": "off", ... } }
//! ```
//!
//! ```json
//! [ { "entity_id": "light.porch", "state": "off", ... } ]
//! ```
//!
//! Order is kept in both cases and becomes the listing order of the store.
//!
//! Timestamps are held in UTC. A record written with an offset
//! (`2024-01-15T10:00:00+02:00`) is served back converted, as
//! `2024-01-15T08:00:00Z`.

use std::path::Path;

use serde_json::Value;

use hamock_domain::entity::Entity;

use crate::error::FixtureError;

/// Read and parse a fixture file.
///
/// # Errors
///
/// See [`parse_states`]; also [`FixtureError::Io`] when the file can't be read.
pub fn load_states(path: &Path) -> Result<Vec<Entity>, FixtureError> {
    let content = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_states(&content)
}

/// Parse fixture JSON into validated entities.
///
/// # Errors
///
/// - [`FixtureError::Parse`] for invalid JSON or malformed records.
/// - [`FixtureError::Shape`] when the document is neither an object nor an array.
/// - [`FixtureError::KeyMismatch`] when an object key differs from its record's `entity_id`.
/// - [`FixtureError::Invalid`] when a record breaks an entity invariant.
pub fn parse_states(json: &str) -> Result<Vec<Entity>, FixtureError> {
    let entities = match serde_json::from_str::<Value>(json)? {
        Value::Array(items) => items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<Entity>, _>>()?,
        Value::Object(records) => records
            .into_iter()
            .map(|(key, record)| {
                let entity: Entity = serde_json::from_value(record)?;
                if entity.entity_id != key {
                    return Err(FixtureError::KeyMismatch {
                        key,
                        entity_id: entity.entity_id,
                    });
                }
                Ok(entity)
            })
            .collect::<Result<Vec<Entity>, _>>()?,
        _ => return Err(FixtureError::Shape),
    };

    for entity in &entities {
        entity.validate()?;
    }
    Ok(entities)
}
