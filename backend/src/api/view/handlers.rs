//! Handler functions for rendering views.
//!
//! Rendering never fails. Without a signed-in user every gated view comes back as the
//! restricted placeholder.

use axum::extract::{Path, State};
use axum::Json;

use crate::services::view_router::{self, Screen};
use crate::state::AppState;

/// `GET /api/view`
pub async fn current(State(state): State<AppState>) -> Json<Screen> {
    let view = state.navigation.lock().await.current();
    let capabilities = state.session.read().await.capabilities();
    Json(view_router::render(view, &capabilities))
}

/// `GET /api/view/{id}`, renders without navigating.
pub async fn by_id(State(state): State<AppState>, Path(id): Path<String>) -> Json<Screen> {
    let capabilities = state.session.read().await.capabilities();
    Json(view_router::render_id(&id, &capabilities))
}
