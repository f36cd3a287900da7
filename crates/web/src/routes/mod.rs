//! HTTP route handlers for the web frontend.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                      - Redirect to login
//!
//! # Auth
//! GET  /login                 - Login page
//! POST /login                 - Login action
//! POST /logout                - Logout action
//! GET  /forgot-password       - Password recovery page
//! POST /forgot-password       - Password recovery action
//!
//! # Registration
//! GET  /register              - Redirect to the canonical registration route
//! GET  /register-company      - Company registration landing page
//!
//! # Dashboard (requires auth)
//! GET  /dashboard             - Dashboard shell
//!
//! # Master area
//! GET  /master/login          - Master login page
//! POST /master/login          - Master login action
//! POST /master/logout         - Master logout action
//! GET  /master/empresas       - Companies shell (requires master auth)
//! ```

pub mod auth;
pub mod dashboard;
pub mod master;
pub mod register;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use crate::state::AppState;

/// Create all routes for the web frontend.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
        .route(
            "/forgot-password",
            get(auth::forgot_password_page).post(auth::forgot_password),
        )
        .route("/register", get(register::register_redirect))
        .route("/register-company", get(register::register_company))
        .route("/dashboard", get(dashboard::dashboard))
        .route(
            "/master/login",
            get(master::login_page).post(master::login),
        )
        .route("/master/logout", post(master::logout))
        .route("/master/empresas", get(master::companies))
}

/// The root route has nothing to show; send visitors to the login page.
async fn index() -> Redirect {
    Redirect::to("/login")
}
