//! The session-provider seam.
//!
//! All credential verification and password recovery is delegated to the
//! platform backend through this trait. The web layer never sees why a
//! credential was rejected: a rejection is `Ok(false)`, and only transport
//! or backend faults surface as errors.

mod error;

pub use error::ProviderError;

/// External source of truth for authentication.
///
/// Implemented by [`crate::services::platform::PlatformClient`] in
/// production and by scripted stubs in tests.
#[async_trait::async_trait]
pub trait SessionProvider: Send + Sync {
    /// Verify a credential pair.
    ///
    /// Resolves `Ok(true)` on success and `Ok(false)` for rejected
    /// credentials. An expected auth failure must not be an `Err`.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` only for transport or backend faults.
    async fn login(&self, email: &str, password: &str) -> Result<bool, ProviderError>;

    /// Request a password-recovery email for `email`.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` if the recovery email could not be requested.
    async fn recover_password(&self, email: &str) -> Result<(), ProviderError>;
}
