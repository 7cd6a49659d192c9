//! Handler functions for the session endpoints.
//!
//! These expose the identity holder: reading the current user, switching to another
//! directory record, and listing the directory for a user switcher.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::models::Identity;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SwitchRequest {
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct SwitchResponse {
    /// False when the id was unknown and the session was left as it was.
    pub switched: bool,
    pub user: Option<Identity>,
}

/// `GET /auth/session`
pub async fn session(State(state): State<AppState>) -> Json<Option<Identity>> {
    Json(state.session.read().await.current_user().cloned())
}

/// `POST /auth/switch`
pub async fn switch_user(
    State(state): State<AppState>,
    Json(request): Json<SwitchRequest>,
) -> Json<SwitchResponse> {
    let mut session = state.session.write().await;
    let switched = session.switch_user(&request.id);
    Json(SwitchResponse {
        switched,
        user: session.current_user().cloned(),
    })
}

/// `GET /auth/users`
pub async fn users(State(state): State<AppState>) -> Json<Vec<Identity>> {
    Json(state.session.read().await.users().to_vec())
}
