//! Module for the view rendering API.
//!
//! Resolves which screen to draw for the current navigation target and the current
//! identity's capabilities.

pub mod handlers;
pub mod routes;
