//! Authentication middleware for protected routes.
//!
//! Gageboek never sees credentials. An upstream identity layer (Azure
//! Static Web Apps with Entra ID, or any reverse proxy doing the same job)
//! authenticates the caller and injects the resolved principal id in a
//! request header. This middleware only extracts and validates that id.

use axum::{
    Json,
    extract::{FromRequestParts, Request, State},
    http::{StatusCode, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{ApiResponse, AppState};
use gageboek_shared::types::UserId;

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(ApiResponse::error(message)),
    )
        .into_response()
}

/// Authentication middleware that resolves the caller's identity.
///
/// This middleware:
/// 1. Reads the configured principal header
/// 2. Validates the raw id as a `UserId`
/// 3. Stores the `UserId` in request extensions for handlers to access
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let principal = request
        .headers()
        .get(&state.principal_header)
        .and_then(|h| h.to_str().ok());

    let Some(raw) = principal else {
        return unauthorized("Unauthorized: User ID not found");
    };

    match UserId::parse(raw) {
        Ok(user_id) => {
            request.extensions_mut().insert(user_id);
            next.run(request).await
        }
        Err(_) => unauthorized("Unauthorized: invalid user ID"),
    }
}

/// Extractor for the authenticated caller.
///
/// Use this in handlers to get the caller's user id:
///
/// ```ignore
/// async fn handler(user: AuthUser) -> impl IntoResponse {
///     let user_id = user.user_id();
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser(pub UserId);

impl AuthUser {
    /// Returns the caller's user id.
    #[must_use]
    pub fn user_id(&self) -> &UserId {
        &self.0
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<UserId>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| unauthorized("Unauthorized: User ID not found"))
    }
}
