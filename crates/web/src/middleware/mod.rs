//! HTTP middleware: sessions and authentication extractors.

pub mod auth;
pub mod session;

pub use auth::{
    RequireAuth, RequireMasterAuth, clear_current_user, clear_master_user, set_current_user,
    set_master_user,
};
pub use session::create_session_layer;
