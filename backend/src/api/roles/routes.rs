//! Defines the HTTP routes for role administration, guarded by `manage_users`.

use axum::routing::get;
use axum::{middleware, Router};

use super::handlers::{detail, matrix};
use crate::auth::require_manage_users;
use crate::state::AppState;

pub fn roles_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(matrix))
        .route("/{role}", get(detail))
        .route_layer(middleware::from_fn_with_state(state, require_manage_users))
}
