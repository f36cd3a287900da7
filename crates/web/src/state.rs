//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::WebConfig;
use crate::services::session::SessionProvider;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The session provider is
/// injected at construction so tests can substitute a scripted stub for the
/// real platform backend client.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: WebConfig,
    sessions: Arc<dyn SessionProvider>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Web frontend configuration
    /// * `sessions` - Session provider used for login and password recovery
    #[must_use]
    pub fn new(config: WebConfig, sessions: Arc<dyn SessionProvider>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, sessions }),
        }
    }

    /// Get a reference to the web frontend configuration.
    #[must_use]
    pub fn config(&self) -> &WebConfig {
        &self.inner.config
    }

    /// Get a reference to the session provider.
    #[must_use]
    pub fn sessions(&self) -> &dyn SessionProvider {
        self.inner.sessions.as_ref()
    }
}
