//! User handlers.

use axum::{
    extract::{Extension, State},
    response::Json,
    routing::get,
    Router,
};

use common::AppResult;
use domain::{AuthContext, UserSummary};

use crate::state::AppState;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route(
        "/users-without-confirmation-mail",
        get(list_users_without_confirmation_mail),
    )
}

/// List verified users whose confirmation mail has not been sent (realm admin only)
#[utoipa::path(
    get,
    path = "/users-without-confirmation-mail",
    tag = "Users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Verified users still waiting on their confirmation mail", body = Vec<UserSummary>),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "Forbidden - Realm admin only"),
        (status = 503, description = "User directory unavailable")
    )
)]
pub async fn list_users_without_confirmation_mail(
    Extension(auth): Extension<AuthContext>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<UserSummary>>> {
    let users = state
        .confirmation_mail
        .list_users_pending_confirmation_mail(&state.config.realm, &auth)
        .await?;
    Ok(Json(users))
}
