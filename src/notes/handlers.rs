use super::cors::cors;
use super::error::NoteError;
use super::lifecycle::NoteManager;
use super::protocol::{CreateNoteRequest, CreateNoteResponse, ENDPOINT_NOTES, ErrorResponse};
use super::types::NoteId;

use axum::extract::rejection::JsonRejection;
use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use std::sync::Arc;

/// Public note API, with CORS applied to every route.
pub fn notes_router(manager: Arc<NoteManager>) -> Router {
    Router::new()
        .route(ENDPOINT_NOTES, post(handle_create_note))
        .route(&format!("{}/:id", ENDPOINT_NOTES), get(handle_read_note))
        .layer(middleware::from_fn(cors))
        .layer(Extension(manager))
}

pub async fn handle_create_note(
    Extension(manager): Extension<Arc<NoteManager>>,
    payload: Result<Json<CreateNoteRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            tracing::warn!("Rejected create request: {}", rejection);
            return error_response(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };

    match manager.create(req.into()).await {
        Ok(id) => (
            StatusCode::OK,
            Json(CreateNoteResponse { success: true, id }),
        )
            .into_response(),
        Err(e) => note_error_response(e, "server error"),
    }
}

pub async fn handle_read_note(
    Extension(manager): Extension<Arc<NoteManager>>,
    Path(id): Path<String>,
) -> Response {
    match manager.read(&NoteId(id)).await {
        Ok(note) => (StatusCode::OK, Json(note)).into_response(),
        Err(e) => note_error_response(e, "query failed"),
    }
}

/// Client errors carry their own message; server errors are logged and masked.
fn note_error_response(error: NoteError, server_message: &str) -> Response {
    let status = error.status_code();
    if error.is_client_error() {
        return error_response(status, error.to_string());
    }
    tracing::error!("Note request failed: {}", error);
    error_response(status, server_message.to_string())
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorResponse { error })).into_response()
}
