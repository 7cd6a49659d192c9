//! Handler functions for the navigation API.
//!
//! Navigation does not check permissions; whether the target can be shown is decided when
//! the view is rendered.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::services::navigation::{Breadcrumb, NavigationStack};
use crate::services::views::View;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct NavigateRequest {
    pub view: String,
}

#[derive(Debug, Serialize)]
pub struct NavigationState {
    pub current: View,
    pub history: Vec<View>,
    pub can_go_back: bool,
    pub breadcrumbs: Vec<Breadcrumb>,
    /// Whether the request changed the history.
    pub changed: bool,
}

impl NavigationState {
    fn new(stack: &NavigationStack, changed: bool) -> Self {
        Self {
            current: stack.current(),
            history: stack.history().to_vec(),
            can_go_back: stack.can_go_back(),
            breadcrumbs: stack.breadcrumbs(),
            changed,
        }
    }
}

/// `GET /api/navigation`
pub async fn current(State(state): State<AppState>) -> Json<NavigationState> {
    let stack = state.navigation.lock().await;
    Json(NavigationState::new(&stack, false))
}

/// `POST /api/navigation/navigate`
pub async fn navigate(
    State(state): State<AppState>,
    Json(request): Json<NavigateRequest>,
) -> Json<NavigationState> {
    let mut stack = state.navigation.lock().await;
    let changed = stack.navigate_to_id(&request.view);
    Json(NavigationState::new(&stack, changed))
}

/// `POST /api/navigation/back`
pub async fn back(State(state): State<AppState>) -> Json<NavigationState> {
    let mut stack = state.navigation.lock().await;
    let changed = stack.can_go_back();
    stack.go_back();
    Json(NavigationState::new(&stack, changed))
}

/// `POST /api/navigation/reset`
pub async fn reset(State(state): State<AppState>) -> Json<NavigationState> {
    let mut stack = state.navigation.lock().await;
    let changed = stack.can_go_back() || stack.current() != View::DEFAULT;
    stack.reset();
    Json(NavigationState::new(&stack, changed))
}
