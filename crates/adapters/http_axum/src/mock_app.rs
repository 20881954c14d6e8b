//! Mock app contract: a self-contained set of routes hosted by the server.

use axum::Router;

/// A mock application mounted on a [`MockServer`](crate::server::MockServer).
///
/// The router returned by [`MockApp::routes`] must already carry its state and
/// include the base path in its route paths, so it can be merged as is.
pub trait MockApp {
    /// Short identifier, e.g. `home-assistant`.
    fn name(&self) -> &str;

    /// Version string reported at startup.
    fn version(&self) -> &str;

    /// Path prefix every route of this app lives under, e.g. `/api`.
    fn base_path(&self) -> &str;

    /// Build the app's fully-stated router.
    fn routes(&self) -> Router;
}
