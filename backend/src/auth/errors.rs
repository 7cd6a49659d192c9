//! Custom error types specific to access-control failures.
//!
//! The role model itself never fails; these errors only arise at the HTTP boundary when a
//! request needs a signed-in identity or a permission the current role lacks.

use thiserror::Error;

use crate::auth::models::Permission;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("no user is signed in")]
    NoSession,

    #[error("missing permission: {0}")]
    Forbidden(Permission),
}
