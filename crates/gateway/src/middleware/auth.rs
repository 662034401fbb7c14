//! Authentication middleware.

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request},
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{authorization::Bearer, Authorization, HeaderMapExt};
use tracing::debug;

use common::{AppError, AppResult};

use crate::state::AppState;

/// Authentication middleware that resolves bearer tokens.
///
/// On success the caller's `AuthContext` is inserted into the request
/// extensions; otherwise the request is rejected before any handler runs.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_token(request.headers())?;

    let auth = state.authenticator.resolve(&token).await.map_err(|e| {
        debug!("Bearer token rejected: {}", e);
        e
    })?;

    request.extensions_mut().insert(auth);

    Ok(next.run(request).await)
}

/// Extract bearer token from Authorization header.
fn extract_token(headers: &HeaderMap) -> AppResult<String> {
    let Authorization(bearer) = headers
        .typed_get::<Authorization<Bearer>>()
        .ok_or(AppError::Unauthorized)?;

    let token = bearer.token().trim();
    if token.is_empty() {
        return Err(AppError::Unauthorized);
    }

    Ok(token.to_string())
}
