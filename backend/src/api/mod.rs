//! Central module for organizing the application's main API endpoints.
//!
//! This module acts as a top-level container for the API domains (user profile,
//! navigation, view rendering, role administration) and assembles them, together with
//! the session routes, into the application router.

pub mod navigation;
pub mod roles;
pub mod user;
pub mod view;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::auth::auth_router;
use crate::middleware::trace_layer;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

async fn root_handler() -> &'static str {
    "Welcome to ConfOps!"
}

async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse { status: "ok" }))
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health))
        .nest("/auth", auth_router())
        .nest("/api/user", user::routes::user_router())
        .nest("/api/navigation", navigation::routes::navigation_router())
        .nest("/api/view", view::routes::view_router())
        .nest("/api/roles", roles::routes::roles_router(state.clone()))
        .layer(trace_layer())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Method, Request};
    use confops_adapters::SeedDirectory;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::auth::{Identity, Session};
    use crate::services::navigation::NavigationStack;

    fn session() -> Session {
        Session::new(SeedDirectory::records().into_iter().map(Identity::from))
    }

    fn test_app(current: Option<&str>) -> Router {
        let mut session = session();
        if let Some(id) = current {
            session.switch_user(id);
        }
        app(AppState::new(session, NavigationStack::default()))
    }

    async fn call(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                request = request.header("content-type", "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };

        let response = app
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
        call(app, Method::GET, uri, None).await
    }

    async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
        call(app, Method::POST, uri, Some(body)).await
    }

    fn nav_ids(profile: &Value) -> Vec<String> {
        profile["nav"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["id"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn health_check() {
        let app = test_app(None);
        let (status, body) = get(&app, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn session_is_empty_until_switched() {
        let app = test_app(None);
        let (status, body) = get(&app, "/auth/session").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::Null);

        let (status, body) = get(&app, "/api/user/me").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["code"], "NO_SESSION");
    }

    #[tokio::test]
    async fn ceo_profile() {
        let app = test_app(Some("u-ceo"));
        let (status, profile) = get(&app, "/api/user/me").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(profile["user"]["id"], "u-ceo");
        assert_eq!(profile["role_name"], "CEO");
        assert_eq!(profile["capabilities"]["create_events"], true);
        assert_eq!(profile["capabilities"]["view_budgets"], true);
        assert_eq!(profile["capabilities"]["export_data"], true);
        assert!(nav_ids(&profile).contains(&"audit-logs".to_string()));
    }

    #[tokio::test]
    async fn switching_user_changes_profile() {
        let app = test_app(Some("u-ceo"));

        let (status, body) = post(&app, "/auth/switch", json!({"id": "u-designer"})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["switched"], true);
        assert_eq!(body["user"]["role"], "designer");

        let (_, profile) = get(&app, "/api/user/me").await;
        assert_eq!(profile["capabilities"]["create_events"], false);
        assert_eq!(profile["capabilities"]["contacts_full"], false);
        assert_eq!(
            nav_ids(&profile),
            vec!["dashboard", "tasks", "uploads", "notifications", "settings"]
        );
    }

    #[tokio::test]
    async fn switching_to_unknown_user_is_ignored() {
        let app = test_app(Some("u-ceo"));
        let (status, body) = post(&app, "/auth/switch", json!({"id": "u-nobody"})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["switched"], false);
        assert_eq!(body["user"]["id"], "u-ceo");
    }

    #[tokio::test]
    async fn directory_listing() {
        let app = test_app(None);
        let (status, body) = get(&app, "/auth/users").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body.as_array().unwrap().len(),
            SeedDirectory::records().len()
        );
    }

    #[tokio::test]
    async fn navigation_sequence() {
        let app = test_app(Some("u-ceo"));

        let (_, state) = get(&app, "/api/navigation").await;
        assert_eq!(state["history"], json!(["dashboard"]));
        assert_eq!(state["can_go_back"], false);

        post(&app, "/api/navigation/navigate", json!({"view": "events"})).await;
        let (_, state) = post(&app, "/api/navigation/navigate", json!({"view": "tasks"})).await;
        assert_eq!(state["changed"], true);

        let (_, again) = post(&app, "/api/navigation/navigate", json!({"view": "tasks"})).await;
        assert_eq!(again["changed"], false);
        assert_eq!(again["history"], json!(["dashboard", "events", "tasks"]));

        let (status, state) = post(&app, "/api/navigation/back", json!({})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(state["current"], "events");
        assert_eq!(state["history"], json!(["dashboard", "events"]));
        assert_eq!(state["breadcrumbs"][1]["label"], "Events");

        let (_, screen) = get(&app, "/api/view").await;
        assert_eq!(screen["status"], "rendered");
        assert_eq!(screen["screen"], "events_calendar");

        let (_, state) = post(&app, "/api/navigation/reset", json!({})).await;
        assert_eq!(state["history"], json!(["dashboard"]));
        assert_eq!(state["changed"], true);
    }

    #[tokio::test]
    async fn back_at_root_is_noop() {
        let app = test_app(None);
        let (status, state) = post(&app, "/api/navigation/back", json!({})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(state["changed"], false);
        assert_eq!(state["history"], json!(["dashboard"]));
    }

    #[tokio::test]
    async fn guest_sees_restricted_placeholder() {
        let app = test_app(Some("u-guest"));

        let (_, profile) = get(&app, "/api/user/me").await;
        assert_eq!(profile["nav"], json!([]));
        assert_eq!(profile["role_name"], Value::Null);
        assert!(profile["capabilities"]
            .as_object()
            .unwrap()
            .values()
            .all(|allowed| allowed == &Value::Bool(false)));

        for view in ["audit-logs", "budgets", "calendar", "tasks"] {
            let (status, screen) = get(&app, &format!("/api/view/{view}")).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(screen["status"], "restricted", "{view}");
            assert_eq!(screen["title"], "Access Restricted");
        }
    }

    #[tokio::test]
    async fn unknown_view_renders_dashboard() {
        let app = test_app(Some("u-designer"));
        let (_, screen) = get(&app, "/api/view/not-a-view").await;
        assert_eq!(screen["status"], "rendered");
        assert_eq!(screen["view"], "dashboard");
    }

    #[tokio::test]
    async fn role_administration_requires_manage_users() {
        let app = test_app(Some("u-ceo"));
        let (status, matrix) = get(&app, "/api/roles").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(matrix.as_array().unwrap().len(), 15);

        let (status, detail) = get(&app, "/api/roles/designer").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(detail["known"], true);
        assert_eq!(detail["capabilities"]["upload_files"], true);
        assert_eq!(detail["granted"], json!(["view_tasks", "upload_files"]));

        let (status, detail) = get(&app, "/api/roles/guest123").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(detail["known"], false);
        assert_eq!(detail["nav"], json!([]));
        assert_eq!(detail["granted"], json!([]));

        post(&app, "/auth/switch", json!({"id": "u-designer"})).await;
        let (status, body) = get(&app, "/api/roles").await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["code"], "FORBIDDEN");

        let anonymous = test_app(None);
        let (status, _) = get(&anonymous, "/api/roles").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
