//! Module for role administration.
//!
//! Read-only views of the role registry, available to roles that manage users.

pub mod handlers;
pub mod routes;
