//! API route definitions.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, middleware};
use tracing::error;

use crate::middleware::auth::auth_middleware;
use crate::{ApiResponse, AppState};
use gageboek_shared::AppError;
use gageboek_store::StoreError;

pub mod entries;
pub mod health;
pub mod reports;

/// Creates the API router with protected routes that need state for middleware.
#[allow(clippy::needless_pass_by_value)]
pub fn api_routes_with_state(state: AppState) -> Router<AppState> {
    // Protected routes that require a resolved caller identity
    let protected_routes = Router::new()
        .merge(entries::routes())
        .merge(reports::routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Combine public and protected routes
    Router::new().merge(health::routes()).merge(protected_routes)
}

/// Builds an error response with the given status and message.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ApiResponse::error(message))).into_response()
}

/// Maps a store failure onto the response envelope.
///
/// Validation and not-found failures carry their own message; backend
/// failures are logged and surfaced with the given generic message only.
pub(crate) fn store_failure(err: StoreError, generic: &str) -> Response {
    let err = AppError::from(err);
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    if status.is_server_error() {
        error!(error = %err, "{generic}");
        return error_response(status, generic);
    }

    error_response(status, err.to_string())
}
