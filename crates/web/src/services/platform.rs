//! Platform backend API client.
//!
//! Implements [`SessionProvider`] over the backend's REST auth endpoints.
//! The backend is the source of truth for accounts; this client only
//! translates HTTP statuses into the provider contract.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::config::PlatformApiConfig;
use crate::services::session::{ProviderError, SessionProvider};

/// How much of an unexpected response body is kept for diagnostics.
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Client for the platform backend API.
#[derive(Clone)]
pub struct PlatformClient {
    inner: Arc<PlatformClientInner>,
}

struct PlatformClientInner {
    client: reqwest::Client,
    base_url: String,
    service_token: SecretString,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RecoverRequest<'a> {
    email: &'a str,
}

impl PlatformClient {
    /// Create a new platform API client.
    #[must_use]
    pub fn new(config: &PlatformApiConfig) -> Self {
        Self {
            inner: Arc::new(PlatformClientInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.trim_end_matches('/').to_string(),
                service_token: config.service_token.clone(),
            }),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    async fn post<T: Serialize>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<reqwest::Response, ProviderError> {
        let response = self
            .inner
            .client
            .post(self.endpoint(path))
            .bearer_auth(self.inner.service_token.expose_secret())
            .json(payload)
            .send()
            .await?;
        Ok(response)
    }
}

/// Turn an unexpected backend response into a `ProviderError`.
async fn unexpected(response: reqwest::Response) -> ProviderError {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .unwrap_or_default()
        .chars()
        .take(MAX_ERROR_BODY_CHARS)
        .collect();
    ProviderError::Api { status, body }
}

#[async_trait::async_trait]
impl SessionProvider for PlatformClient {
    async fn login(&self, email: &str, password: &str) -> Result<bool, ProviderError> {
        let response = self
            .post("/v1/auth/sessions", &LoginRequest { email, password })
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(true);
        }
        // Rejected credentials are an expected outcome, not a fault.
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            tracing::debug!("login rejected by platform backend");
            return Ok(false);
        }

        Err(unexpected(response).await)
    }

    async fn recover_password(&self, email: &str) -> Result<(), ProviderError> {
        let response = self
            .post("/v1/auth/recoveries", &RecoverRequest { email })
            .await?;

        if response.status().is_success() {
            return Ok(());
        }

        Err(unexpected(response).await)
    }
}
