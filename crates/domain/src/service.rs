//! Service: a callable command exposed by the hub.
//!
//! Examples: `light.turn_on`, `switch.turn_off`.
//!
//! A raw request is turned into a [`ServiceCall`] by [`validation`], then
//! resolved against the dispatch table in [`action`].

pub mod action;
pub mod call;
pub mod validation;

pub use action::ServiceAction;
pub use call::{ServiceCall, ServiceResponse};
pub use validation::validate_service_call;
