//! Module for user profile endpoints.
//!
//! This module serves information about the signed-in identity that is distinct from
//! the session switch itself, such as its resolved capabilities and navigation.

pub mod handlers;
pub mod routes;
