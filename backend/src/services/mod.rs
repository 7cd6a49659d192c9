//! Module for the navigation services.
//!
//! This module holds the view catalog, the navigation stack that tracks where the user
//! is, and the router that decides what each view renders for a given set of
//! capabilities.

pub mod navigation;
pub mod view_router;
pub mod views;
