//! Access-control module: roles, permissions, the session, and the guards built on them.
//!
//! This module provides the public interface for switching identity, resolving what the
//! current role may see and do, and protecting the routes that need a permission.

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod registry;
pub mod routes;
pub mod service;

// Re-exports for convenience
pub use errors::AuthError;
pub use middleware::{require_manage_users, CurrentUser};
pub use models::{Identity, Permission, Role};
pub use registry::{capabilities_for, capabilities_for_name, nav_items_for, nav_items_for_name};
pub use registry::{Capabilities, NavItem};
pub use routes::auth_router;
pub use service::Session;
