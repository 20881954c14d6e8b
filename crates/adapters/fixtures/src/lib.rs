//! # hamock-adapter-fixtures
//!
//! Seed data loaded into the entity store at startup.
//!
//! ## Built-in home
//!
//! | Entity ID | State | Notes |
//! |-----------|-------|-------|
//! | `light.living_room` | `off` | brightness + color temperature |
//! | `light.bedroom` | `off` | brightness only |
//! | `switch.kitchen` | `off` | |
//! | `sensor.temperature_living` | `22.5` | °C |
//! | `sensor.humidity_living` | `45` | % |
//! | `sensor.motion_detector` | `off` | motion |
//!
//! A JSON file can replace the built-in home, see [`file`].
//!
//! ## Dependency rule
//!
//! Depends on `hamock-domain` only.

mod builtin;
pub mod error;
pub mod file;

use std::path::Path;

use hamock_domain::entity::Entity;

pub use builtin::builtin_states;
pub use error::FixtureError;

/// Load seed entities from `path` when given, otherwise the built-in home.
///
/// # Errors
///
/// Returns a [`FixtureError`] if the file cannot be read or parsed, or if a
/// seed entity breaks an entity invariant.
pub fn load(path: Option<&Path>) -> Result<Vec<Entity>, FixtureError> {
    let entities = match path {
        Some(path) => file::load_states(path)?,
        None => builtin_states()?,
    };
    let source = path.map_or_else(|| "builtin".to_string(), |p| p.display().to_string());
    tracing::info!(count = entities.len(), %source, "loaded seed entities");
    Ok(entities)
}
