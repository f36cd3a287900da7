//! Session-related types.
//!
//! Types stored in the session for authentication state.

use serde::{Deserialize, Serialize};

use obraplan_core::Email;

/// Session-stored user identity.
///
/// Minimal data stored in the session to identify the logged-in user. The
/// platform backend remains the source of truth; this is only the flag that
/// survives the post-login redirect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User's email address.
    pub email: Email,
}

/// Session keys for authentication data.
pub mod keys {
    /// Key for storing the current logged-in tenant user.
    pub const CURRENT_USER: &str = "current_user";

    /// Key for storing the logged-in master admin.
    pub const MASTER_USER: &str = "master_user";
}
