//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures errors to Sentry before
//! responding to the client. Route handlers that can fail return
//! `Result<T, AppError>`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use obraplan_core::EmailError;

use crate::services::session::ProviderError;

/// Application-level error type for the web frontend.
#[derive(Debug, Error)]
pub enum AppError {
    /// The platform backend failed in an unexpected way.
    ///
    /// Note that a rejected credential is NOT an error: the session provider
    /// resolves it as `Ok(false)` and the forms recover locally.
    #[error("Session provider error: {0}")]
    Provider(#[from] ProviderError),

    /// An email address failed structural validation.
    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    /// The session store could not be read or written.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Provider(_) | Self::Session(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Provider(_) => StatusCode::BAD_GATEWAY,
            Self::Email(_) => StatusCode::BAD_REQUEST,
            Self::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Provider(_) => "Não foi possível falar com a plataforma. Tente novamente.",
            Self::Email(_) => "Requisição inválida.",
            Self::Session(_) => "Erro interno.",
        };

        (status, message.to_string()).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
