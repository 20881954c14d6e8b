//! JSON REST handlers for entity states.

use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use hamock_app::ports::{EntityStore, IdGenerator};
use hamock_domain::entity::Entity;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Entity>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Entity>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/states`
pub async fn list<S, G>(State(state): State<AppState<S, G>>) -> ListResponse
where
    S: EntityStore + Send + Sync + 'static,
    G: IdGenerator + Send + Sync + 'static,
{
    ListResponse::Ok(Json(state.state_service.list_states()))
}

/// `GET /api/states/{entity_id}`
pub async fn get<S, G>(
    State(state): State<AppState<S, G>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<GetResponse, ApiError>
where
    S: EntityStore + Send + Sync + 'static,
    G: IdGenerator + Send + Sync + 'static,
{
    let Path(entity_id) = path?;
    let entity = state.state_service.get_state(&entity_id)?;
    Ok(GetResponse::Ok(Json(entity)))
}
