//! Authentication route handlers.
//!
//! Handles tenant login, logout, and password recovery. Credential
//! verification lives behind the session provider; these handlers own only
//! form state and the fixed localized messages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use obraplan_core::Email;

use crate::components::FormInput;
use crate::error::AppError;
use crate::filters;
use crate::middleware::{clear_current_user, set_current_user};
use crate::models::CurrentUser;
use crate::state::AppState;

/// Fixed message shown when the provider rejects a credential pair.
pub const MSG_INVALID_CREDENTIALS: &str = "E-mail ou senha inválidos.";

/// Fixed message shown when the recovery email could not be requested.
pub const MSG_RECOVERY_FAILED: &str =
    "Não foi possível enviar o e-mail de recuperação. Tente novamente.";

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Password recovery form data.
#[derive(Debug, Deserialize)]
pub struct RecoverForm {
    pub email: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub email_input: FormInput,
    pub password_input: FormInput,
}

impl LoginTemplate {
    fn build(email: &str, error: Option<&str>) -> Self {
        Self {
            error: error.map(str::to_string),
            email_input: FormInput::email("email", "E-mail")
                .value(email)
                .required(true)
                .autocomplete("email"),
            password_input: FormInput::password("password", "Senha")
                .required(true)
                .autocomplete("current-password"),
        }
    }
}

/// Forgot-password page template.
///
/// When `sent` is set, the form is swapped for the confirmation panel.
#[derive(Template, WebTemplate)]
#[template(path = "auth/forgot_password.html")]
pub struct ForgotPasswordTemplate {
    pub sent: bool,
    pub error: Option<String>,
    pub email_input: FormInput,
}

impl ForgotPasswordTemplate {
    fn build(email: &str, sent: bool, error: Option<&str>) -> Self {
        Self {
            sent,
            error: error.map(str::to_string),
            email_input: FormInput::email("email", "E-mail")
                .value(email)
                .required(true)
                .autocomplete("email"),
        }
    }
}

// =============================================================================
// Login Routes
// =============================================================================

/// Display the login page.
///
/// GET /login
pub async fn login_page() -> LoginTemplate {
    LoginTemplate::build("", None)
}

/// Handle login form submission.
///
/// A rejected credential re-renders the form with the fixed message and the
/// entered email preserved. A provider fault propagates: the provider
/// contract is to resolve, not fail, for expected rejections.
///
/// POST /login
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let accepted = state.sessions().login(&form.email, &form.password).await?;

    if !accepted {
        tracing::warn!("login rejected");
        return Ok(
            LoginTemplate::build(&form.email, Some(MSG_INVALID_CREDENTIALS)).into_response(),
        );
    }

    let user = CurrentUser {
        email: Email::parse(&form.email)?,
    };
    set_current_user(&session, &user).await?;

    Ok(Redirect::to("/dashboard").into_response())
}

/// Handle logout.
///
/// POST /logout
pub async fn logout(session: Session) -> Result<Redirect, AppError> {
    clear_current_user(&session).await?;
    Ok(Redirect::to("/login"))
}

// =============================================================================
// Password Recovery Routes
// =============================================================================

/// Display the forgot-password page.
///
/// GET /forgot-password
pub async fn forgot_password_page() -> ForgotPasswordTemplate {
    ForgotPasswordTemplate::build("", false, None)
}

/// Handle forgot-password form submission.
///
/// Unlike login, a provider fault is caught here and re-rendered as the
/// generic message with the entered email kept in the field. Single
/// attempt; the user re-triggers by submitting again.
///
/// POST /forgot-password
pub async fn forgot_password(
    State(state): State<AppState>,
    Form(form): Form<RecoverForm>,
) -> ForgotPasswordTemplate {
    match state.sessions().recover_password(&form.email).await {
        Ok(()) => ForgotPasswordTemplate::build(&form.email, true, None),
        Err(e) => {
            tracing::warn!("password recovery request failed: {e}");
            ForgotPasswordTemplate::build(&form.email, false, Some(MSG_RECOVERY_FAILED))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    use super::*;
    use crate::routes::test_support::{body_text, form_post, test_app};
    use crate::services::session::stub::{LoginOutcome, StubSessionProvider};

    #[tokio::test]
    async fn test_login_page_renders_form() {
        let app = test_app(Arc::new(StubSessionProvider::new(LoginOutcome::Reject)));

        let response = app
            .oneshot(Request::get("/login").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("name=\"email\""));
        assert!(body.contains("name=\"password\""));
        assert!(!body.contains(MSG_INVALID_CREDENTIALS));
    }

    #[tokio::test]
    async fn test_login_accepted_redirects_to_dashboard() {
        let provider = Arc::new(StubSessionProvider::new(LoginOutcome::Accept));
        let app = test_app(provider.clone());

        let response = app
            .oneshot(form_post("/login", "email=user%40example.com&password=s3nh4"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/dashboard");
        assert_eq!(provider.calls(), vec!["login:user@example.com"]);
    }

    #[tokio::test]
    async fn test_login_rejected_rerenders_with_message_and_email() {
        let app = test_app(Arc::new(StubSessionProvider::new(LoginOutcome::Reject)));

        let response = app
            .oneshot(form_post("/login", "email=user%40example.com&password=errada"))
            .await
            .unwrap();

        // Back on the login view, form editable again
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains(MSG_INVALID_CREDENTIALS));
        assert!(body.contains("value=\"user@example.com\""));
    }

    #[tokio::test]
    async fn test_login_provider_fault_propagates() {
        let app = test_app(Arc::new(StubSessionProvider::new(LoginOutcome::Fail)));

        let response = app
            .oneshot(form_post("/login", "email=user%40example.com&password=x"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_forgot_password_success_shows_confirmation_panel() {
        let provider = Arc::new(StubSessionProvider::new(LoginOutcome::Reject));
        let app = test_app(provider.clone());

        let response = app
            .oneshot(form_post("/forgot-password", "email=user%40example.com"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("Enviamos um link de recuperação"));
        assert!(body.contains("Voltar para o login"));
        assert_eq!(provider.calls(), vec!["recover:user@example.com"]);
    }

    #[tokio::test]
    async fn test_forgot_password_failure_preserves_email() {
        let app = test_app(Arc::new(StubSessionProvider::with_failing_recovery()));

        let response = app
            .oneshot(form_post("/forgot-password", "email=user%40example.com"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains(MSG_RECOVERY_FAILED));
        assert!(body.contains("value=\"user@example.com\""));
    }

    #[tokio::test]
    async fn test_logout_redirects_to_login() {
        let app = test_app(Arc::new(StubSessionProvider::new(LoginOutcome::Reject)));

        let response = app
            .oneshot(Request::post("/logout").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/login");
    }
}
