//! Request guards built on the session.
//!
//! `CurrentUser` extracts the signed-in identity together with its resolved capabilities.
//! `require_manage_users` protects the role administration routes.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;

use crate::auth::errors::AuthError;
use crate::auth::models::{Identity, Permission};
use crate::auth::registry::Capabilities;
use crate::errors::AppError;
use crate::state::AppState;

/// The identity behind a request and what it may do.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub identity: Identity,
    pub capabilities: Capabilities,
}

impl CurrentUser {
    pub async fn resolve(state: &AppState) -> Result<Self, AuthError> {
        let session = state.session.read().await;
        let identity = session.current_user().cloned().ok_or(AuthError::NoSession)?;
        Ok(Self {
            identity,
            capabilities: session.capabilities(),
        })
    }

    pub fn require(&self, permission: Permission) -> Result<(), AuthError> {
        if self.capabilities.allows(permission) {
            Ok(())
        } else {
            Err(AuthError::Forbidden(permission))
        }
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self::resolve(state).await?)
    }
}

pub async fn require_manage_users(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = CurrentUser::resolve(&state).await?;
    if let Err(err) = user.require(Permission::ManageUsers) {
        tracing::warn!(
            id = %user.identity.id,
            role = %user.identity.role,
            "role administration denied"
        );
        return Err(err.into());
    }
    Ok(next.run(request).await)
}
