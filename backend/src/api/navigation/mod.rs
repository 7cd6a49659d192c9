//! Module for the navigation API.
//!
//! Exposes the navigation stack (forward, back, reset) and the breadcrumb trail derived
//! from it.

pub mod handlers;
pub mod routes;
