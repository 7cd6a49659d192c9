//! Defines the HTTP routes for view rendering.

use axum::routing::get;
use axum::Router;

use super::handlers::{by_id, current};
use crate::state::AppState;

pub fn view_router() -> Router<AppState> {
    Router::new()
        .route("/", get(current))
        .route("/{id}", get(by_id))
}
