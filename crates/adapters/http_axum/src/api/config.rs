//! `GET /api/config`.

use axum::Json;
use axum::extract::State;

use hamock_app::ports::{EntityStore, IdGenerator};
use hamock_domain::system_config::SystemConfig;

use crate::state::AppState;

/// `GET /api/config`: the static system config snapshot.
pub async fn get<S, G>(State(state): State<AppState<S, G>>) -> Json<SystemConfig>
where
    S: EntityStore + Send + Sync + 'static,
    G: IdGenerator + Send + Sync + 'static,
{
    Json(SystemConfig::clone(&state.system_config))
}
