//! # hamock-domain
//!
//! Pure domain model for the hamock smart-home hub test double.
//!
//! ## Responsibilities
//! - Foundational types: context identifiers, error conventions, timestamps
//! - Define **Entities** (state holders keyed by `<domain>.<object_id>`)
//! - Define **Service calls** (`light.turn_on`, `switch.turn_off`, …), their
//!   validation and the dispatch table mapping them to state transitions
//! - Define the read-only **System config** snapshot
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod entity;
pub mod service;
pub mod system_config;
