//! ConfOps backend library.
//!
//! Role registry, session holder, navigation stack and view router for the conference
//! operations dashboard, plus the Axum API that serves them to the browser.

pub mod api;
pub mod auth;
pub mod config;
pub mod errors;
pub mod middleware;
pub mod services;
pub mod state;
