//! Handler functions for inspecting the role registry.

use axum::extract::Path;
use axum::Json;
use serde::Serialize;

use crate::auth::registry::{self, RoleGrant};
use crate::auth::{
    capabilities_for_name, nav_items_for_name, Capabilities, NavItem, Permission, Role,
};

#[derive(Debug, Serialize)]
pub struct RoleDetail {
    pub role: String,
    /// False when `role` is not a recognised identifier; everything below is then empty.
    pub known: bool,
    /// Only the tags the role holds, in declaration order.
    pub granted: Vec<Permission>,
    pub capabilities: Capabilities,
    pub nav: Vec<NavItem>,
}

/// `GET /api/roles`
pub async fn matrix() -> Json<Vec<RoleGrant>> {
    Json(registry::matrix())
}

/// `GET /api/roles/{role}`
pub async fn detail(Path(role): Path<String>) -> Json<RoleDetail> {
    let capabilities = capabilities_for_name(&role);
    Json(RoleDetail {
        known: role.parse::<Role>().is_ok(),
        granted: capabilities.permissions().iter().copied().collect(),
        capabilities,
        nav: nav_items_for_name(&role),
        role,
    })
}
