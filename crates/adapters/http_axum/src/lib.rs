//! # hamock-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Host one or more **mock apps** ([`mock_app::MockApp`]) behind a single
//!   [`server::MockServer`], each contributing routes under its own base path
//! - Provide the **Home Assistant** mock app: `/api/config`, `/api/states`,
//!   `/api/states/{entity_id}`, `/api/services/{domain}/{service}`, `/api/events`
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into JSON responses
//! - Apply cross-cutting middleware: permissive CORS and request tracing
//!
//! ## Dependency rule
//! Depends on `hamock-app` (for port traits and services) and `hamock-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod home_assistant;
pub mod mock_app;
pub mod server;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;
