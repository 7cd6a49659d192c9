//! Defines the HTTP routes for the session.
//!
//! There is no login: a client picks a user from the directory and switches to it.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{session, switch_user, users};
use crate::state::AppState;

pub fn auth_router() -> Router<AppState> {
    Router::new()
        .route("/session", get(session))
        .route("/switch", post(switch_user))
        .route("/users", get(users))
}
