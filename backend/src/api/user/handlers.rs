//! Handler functions for the current user's profile.
//!
//! The profile bundles everything a client needs to lay out the shell for the signed-in
//! identity: who it is, what it may do, and which nav entries to show.

use axum::Json;
use serde::Serialize;

use crate::auth::{nav_items_for, Capabilities, CurrentUser, Identity, NavItem};

#[derive(Debug, Serialize)]
pub struct Profile {
    pub user: Identity,
    /// Display name of the role, absent when the role is not recognised.
    pub role_name: Option<&'static str>,
    pub capabilities: Capabilities,
    pub nav: Vec<NavItem>,
}

/// `GET /api/user/me`
pub async fn me(user: CurrentUser) -> Json<Profile> {
    let role = user.identity.role();
    Json(Profile {
        role_name: role.map(|role| role.display_name()),
        nav: nav_items_for(role),
        user: user.identity,
        capabilities: user.capabilities,
    })
}
