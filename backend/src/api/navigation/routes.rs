//! Defines the HTTP routes for the navigation stack.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{back, current, navigate, reset};
use crate::state::AppState;

pub fn navigation_router() -> Router<AppState> {
    Router::new()
        .route("/", get(current))
        .route("/navigate", post(navigate))
        .route("/back", post(back))
        .route("/reset", post(reset))
}
