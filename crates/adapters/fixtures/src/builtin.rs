//! Built-in demo home.
//!
//! Every entity carries a fixed context id and the same seed timestamp so
//! that a fresh process always serves byte-identical states.

mod lights;
mod sensors;
mod switches;

use hamock_domain::entity::Entity;
use hamock_domain::error::MockError;
use hamock_domain::time::Timestamp;

/// Timestamp stamped on every built-in entity.
const SEEDED_AT: &str = "2024-01-15T10:00:00Z";

/// Entities of the built-in home, in listing order.
///
/// # Errors
///
/// Returns a validation error if a hardcoded entity is rejected by the
/// builder.
pub fn builtin_states() -> Result<Vec<Entity>, MockError> {
    let ts = seeded_at();
    let mut entities = lights::entities(ts)?;
    entities.extend(switches::entities(ts)?);
    entities.extend(sensors::entities(ts)?);
    Ok(entities)
}

fn seeded_at() -> Timestamp {
    SEEDED_AT.parse().unwrap_or_default()
}
