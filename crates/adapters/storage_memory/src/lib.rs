//! # hamock-adapter-storage-memory
//!
//! In-memory implementation of the [`EntityStore`](hamock_app::ports::EntityStore) port.
//!
//! ## Responsibilities
//! - Hold the seeded entities for the lifetime of the process
//! - Preserve seed order for listings
//! - Serialize mutations behind a single lock so readers never see a
//!   half-applied transition
//!
//! Nothing is persisted: a restart brings back the seed data.
//!
//! ## Dependency rule
//! Depends on `hamock-app` (for port traits) and `hamock-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod entity_store;

pub use entity_store::InMemoryEntityStore;
