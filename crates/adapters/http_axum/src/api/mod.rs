//! JSON REST API handler modules of the Home Assistant mock app.

#[allow(clippy::missing_errors_doc)]
pub mod config;
pub mod events;
#[allow(clippy::missing_errors_doc)]
pub mod services;
#[allow(clippy::missing_errors_doc)]
pub mod states;

use axum::Router;
use axum::routing::{get, post};

use hamock_app::ports::{EntityStore, IdGenerator};

use crate::state::AppState;

/// Build the API sub-router, to be nested under the app's base path.
pub fn routes<S, G>() -> Router<AppState<S, G>>
where
    S: EntityStore + Send + Sync + 'static,
    G: IdGenerator + Send + Sync + 'static,
{
    Router::new()
        .route("/config", get(config::get::<S, G>))
        // States
        .route("/states", get(states::list::<S, G>))
        .route("/states/{entity_id}", get(states::get::<S, G>))
        // Services
        .route("/services/{domain}/{service}", post(services::call::<S, G>))
        // Events
        .route("/events", get(events::stream))
}
