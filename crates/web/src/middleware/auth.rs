//! Authentication middleware and extractors.
//!
//! Provides extractors for requiring an authenticated session in route
//! handlers. Tenant users and the master admin use separate session keys,
//! so a tenant session never grants access to the master area.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::models::{CurrentUser, session_keys};

/// Error returned when authentication is required but missing.
pub enum AuthRejection {
    /// Redirect to a login page.
    RedirectTo(&'static str),
    /// Unauthorized response (session layer missing).
    Unauthorized,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectTo(path) => Redirect::to(path).into_response(),
            Self::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
        }
    }
}

async fn user_from_session(parts: &mut Parts, key: &str) -> Result<Option<CurrentUser>, AuthRejection> {
    // Get the session from extensions (set by SessionManagerLayer)
    let session = parts
        .extensions
        .get::<Session>()
        .ok_or(AuthRejection::Unauthorized)?;

    Ok(session.get(key).await.ok().flatten())
}

/// Extractor that requires a logged-in tenant user.
///
/// If no user is logged in, the request is redirected to the login page.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAuth(user): RequireAuth,
/// ) -> impl IntoResponse {
///     format!("Olá, {}!", user.email)
/// }
/// ```
pub struct RequireAuth(pub CurrentUser);

impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        user_from_session(parts, session_keys::CURRENT_USER)
            .await?
            .map(Self)
            .ok_or(AuthRejection::RedirectTo("/login"))
    }
}

/// Extractor that requires the logged-in master admin.
///
/// If no master session exists, the request is redirected to the master
/// login page.
pub struct RequireMasterAuth(pub CurrentUser);

impl<S> FromRequestParts<S> for RequireMasterAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        user_from_session(parts, session_keys::MASTER_USER)
            .await?
            .map(Self)
            .ok_or(AuthRejection::RedirectTo("/master/login"))
    }
}

/// Helper to set the current tenant user in the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_user(
    session: &Session,
    user: &CurrentUser,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CURRENT_USER, user).await
}

/// Helper to clear the current tenant user from the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_user(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<CurrentUser>(session_keys::CURRENT_USER)
        .await?;
    Ok(())
}

/// Helper to set the master admin in the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_master_user(
    session: &Session,
    user: &CurrentUser,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::MASTER_USER, user).await
}

/// Helper to clear the master admin from the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_master_user(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<CurrentUser>(session_keys::MASTER_USER)
        .await?;
    Ok(())
}
