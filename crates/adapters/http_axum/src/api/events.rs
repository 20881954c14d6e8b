//! `GET /api/events`: static event-stream stub.

use axum::http::header;
use axum::response::IntoResponse;

/// The single frame served on the event stream.
pub const CONNECTED_FRAME: &str = "data: {\"type\":\"connected\"}\n\n";

/// `GET /api/events`
///
/// Answers with one Server-Sent-Events frame and ends the response. There is
/// no subscription behind it.
pub async fn stream() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/event-stream"),
            (header::CACHE_CONTROL, "no-cache"),
            (header::CONNECTION, "keep-alive"),
        ],
        CONNECTED_FRAME,
    )
}
