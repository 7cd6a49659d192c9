//! Defines the HTTP routes for the current user's profile.

use axum::routing::get;
use axum::Router;

use super::handlers::me;
use crate::state::AppState;

pub fn user_router() -> Router<AppState> {
    Router::new().route("/me", get(me))
}
