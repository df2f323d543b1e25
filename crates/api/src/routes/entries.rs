//! Gage entry routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use rust_decimal::Decimal;
use tracing::info;

use super::{error_response, store_failure};
use crate::{ApiResponse, AppState, middleware::AuthUser};
use gageboek_core::entry::NewGageEntry;
use gageboek_shared::types::EntryId;

/// Creates the entry routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/entries", post(create_entry))
        .route("/entries", get(list_entries))
        .route("/entries/{entry_id}", delete(delete_entry))
}

/// POST /api/entries
///
/// Saves a new gage/income entry for the authenticated caller. The store
/// assigns the id and timestamps and computes the VAT split.
async fn create_entry(
    State(state): State<AppState>,
    user: AuthUser,
    body: Result<Json<NewGageEntry>, JsonRejection>,
) -> Response {
    let Json(entry) = match body {
        Ok(body) => body,
        Err(JsonRejection::JsonSyntaxError(_)) => {
            return error_response(StatusCode::BAD_REQUEST, "Invalid JSON in request body");
        }
        Err(_) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                "Missing or invalid fields: date, description, category, amountIncludingVAT, vatRate",
            );
        }
    };

    // Reject obviously bad input before touching the store.
    if entry.amount_including_vat <= Decimal::ZERO {
        return error_response(StatusCode::BAD_REQUEST, "Amount must be greater than 0");
    }
    if entry.description.trim().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Description must not be empty");
    }

    match state.repository.save(user.user_id(), entry).await {
        Ok(saved) => {
            info!(entry_id = %saved.id, user_id = %user.user_id(), "created gage entry");
            (StatusCode::CREATED, Json(ApiResponse::ok(saved))).into_response()
        }
        Err(e) => store_failure(e, "Failed to save gage entry"),
    }
}

/// GET /api/entries
///
/// Lists the caller's entries, most recent date first.
async fn list_entries(State(state): State<AppState>, user: AuthUser) -> Response {
    match state.repository.list_by_user(user.user_id()).await {
        Ok(entries) => (StatusCode::OK, Json(ApiResponse::ok(entries))).into_response(),
        Err(e) => store_failure(e, "Failed to list gage entries"),
    }
}

/// DELETE /api/entries/{entry_id}
///
/// Deletes one of the caller's entries; unknown ids yield a 404 envelope.
async fn delete_entry(
    State(state): State<AppState>,
    user: AuthUser,
    Path(entry_id): Path<EntryId>,
) -> Response {
    match state.repository.delete(user.user_id(), entry_id).await {
        Ok(()) => {
            info!(entry_id = %entry_id, user_id = %user.user_id(), "deleted gage entry");
            (StatusCode::OK, Json(ApiResponse::ok_empty())).into_response()
        }
        Err(e) => store_failure(e, "Failed to delete gage entry"),
    }
}
