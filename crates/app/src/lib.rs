//! # hamock-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `EntityStore`: read and mutate the entity registry
//!   - `IdGenerator`: mint context ids for accepted service calls
//! - Define **driving/inbound ports** as use-case structs:
//!   - `StateService`: list and look up entity states
//!   - `ServiceDispatcher`: validate service calls and apply transitions
//! - Provide **in-process infrastructure** (id generators) that doesn't need IO
//! - Orchestrate domain objects without knowing *how* storage works
//!
//! ## Dependency rule
//! Depends on `hamock-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod id_generator;
pub mod ports;
pub mod services;
