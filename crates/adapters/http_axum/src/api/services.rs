//! `POST /api/services/{domain}/{service}`.

use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, PathRejection};
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde_json::Value;

use hamock_app::ports::{EntityStore, IdGenerator};
use hamock_domain::error::MockError;
use hamock_domain::service::ServiceResponse;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the call endpoint.
pub enum CallResponse {
    Ok(Json<ServiceResponse>),
}

impl IntoResponse for CallResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /api/services/{domain}/{service}`
///
/// The request body *is* the service data (not wrapped). Any accepted call
/// answers 200 with a fresh context, whether or not it matched an entity or
/// a known service.
pub async fn call<S, G>(
    State(state): State<AppState<S, G>>,
    path: Result<Path<(String, String)>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<CallResponse, ApiError>
where
    S: EntityStore + Send + Sync + 'static,
    G: IdGenerator + Send + Sync + 'static,
{
    let Path((domain, service)) = path?;
    let payload = decode_payload(&body?)?;
    let response = state
        .dispatcher
        .call_service(&domain, &service, payload)?;
    Ok(CallResponse::Ok(Json(response)))
}

/// An empty or whitespace-only body means "no service data".
fn decode_payload(body: &[u8]) -> Result<Option<Value>, MockError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    Ok(Some(serde_json::from_slice(body)?))
}
