//! Master admin route handlers.
//!
//! The master area is the platform operator's view over all tenant
//! companies. Its login form is gated on a single fixed address before the
//! provider is ever called; every other address fails fast with the
//! restricted-access message.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use obraplan_core::Email;

use crate::components::FormInput;
use crate::error::AppError;
use crate::filters;
use crate::middleware::{RequireMasterAuth, clear_master_user, set_master_user};
use crate::models::CurrentUser;
use crate::routes::auth::LoginForm;
use crate::routes::dashboard::UserView;
use crate::state::AppState;

/// The only address allowed through the master login form.
pub const MASTER_EMAIL: &str = "admin@master.com";

/// Fixed message shown when a non-master address is submitted.
pub const MSG_ACCESS_RESTRICTED: &str = "Acesso restrito à conta master.";

/// Fixed message shown when the provider rejects the master credentials.
pub const MSG_INVALID_CREDENTIALS: &str = "Credenciais inválidas.";

// =============================================================================
// Templates
// =============================================================================

/// Master login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/master_login.html")]
pub struct MasterLoginTemplate {
    pub error: Option<String>,
    pub email_input: FormInput,
    pub password_input: FormInput,
}

impl MasterLoginTemplate {
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

/// Companies shell template.
#[derive(Template, WebTemplate)]
#[template(path = "master/empresas.html")]
pub struct CompaniesTemplate {
    pub user: UserView,
    pub current_path: String,
    pub master: bool,
}

// =============================================================================
// Routes
// =============================================================================

/// Display the master login page.
///
/// GET /master/login
pub async fn login_page() -> MasterLoginTemplate {
    MasterLoginTemplate::build("", None)
}

/// Handle master login form submission.
///
/// The entered address is trimmed and lower-cased before the gate, so
/// `"ADMIN@MASTER.COM "` is accepted and the provider receives the
/// normalized address. Anything but the master address fails without a
/// provider call.
///
/// POST /master/login
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let clean_email = form.email.trim().to_lowercase();

    if clean_email != MASTER_EMAIL {
        tracing::warn!("master login attempt with a non-master address");
        return Ok(
            MasterLoginTemplate::build(&form.email, Some(MSG_ACCESS_RESTRICTED)).into_response(),
        );
    }

    let accepted = state.sessions().login(&clean_email, &form.password).await?;

    if !accepted {
        tracing::warn!("master login rejected");
        return Ok(
            MasterLoginTemplate::build(&form.email, Some(MSG_INVALID_CREDENTIALS)).into_response(),
        );
    }

    let user = CurrentUser {
        email: Email::parse(&clean_email)?,
    };
    set_master_user(&session, &user).await?;

    Ok(Redirect::to("/master/empresas").into_response())
}

/// Handle master logout.
///
/// POST /master/logout
pub async fn logout(session: Session) -> Result<Redirect, AppError> {
    clear_master_user(&session).await?;
    Ok(Redirect::to("/master/login"))
}

/// Companies shell.
///
/// GET /master/empresas
pub async fn companies(RequireMasterAuth(user): RequireMasterAuth) -> CompaniesTemplate {
    CompaniesTemplate {
        user: UserView::from(&user),
        current_path: "/master/empresas".to_string(),
        master: true,
    }
}
