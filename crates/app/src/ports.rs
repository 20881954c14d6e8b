//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod entity_store;
pub mod id_generator;

pub use entity_store::EntityStore;
pub use id_generator::IdGenerator;
