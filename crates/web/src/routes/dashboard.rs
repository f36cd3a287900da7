//! Dashboard shell route handler.
//!
//! The shell is pure composition: a persistent sidebar beside a content
//! region. Page content comes from the templates extending the shell; the
//! handler only supplies the session identity for the sidebar.

use askama::Template;
use askama_web::WebTemplate;
use tracing::instrument;

use crate::middleware::RequireAuth;
use crate::models::CurrentUser;

/// User view for templates.
#[derive(Debug, Clone)]
pub struct UserView {
    pub email: String,
}

impl From<&CurrentUser> for UserView {
    fn from(user: &CurrentUser) -> Self {
        Self {
            email: user.email.to_string(),
        }
    }
}

/// Dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard/index.html")]
pub struct DashboardTemplate {
    pub user: UserView,
    pub current_path: String,
    pub master: bool,
}

/// Dashboard page handler.
///
/// GET /dashboard
#[instrument(skip_all)]
pub async fn dashboard(RequireAuth(user): RequireAuth) -> DashboardTemplate {
    DashboardTemplate {
        user: UserView::from(&user),
        current_path: "/dashboard".to_string(),
        master: false,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    use crate::routes::test_support::{body_text, form_post, session_cookie, test_app};
    use crate::services::session::stub::{LoginOutcome, StubSessionProvider};

    #[tokio::test]
    async fn test_dashboard_requires_auth() {
        let app = test_app(Arc::new(StubSessionProvider::new(LoginOutcome::Reject)));

        let response = app
            .oneshot(Request::get("/dashboard").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/login");
    }

    #[tokio::test]
    async fn test_dashboard_renders_after_login() {
        let app = test_app(Arc::new(StubSessionProvider::new(LoginOutcome::Accept)));

        let login_response = app
            .clone()
            .oneshot(form_post("/login", "email=user%40example.com&password=s3nh4"))
            .await
            .unwrap();
        assert_eq!(login_response.status(), StatusCode::SEE_OTHER);
        let cookie = session_cookie(&login_response);

        let response = app
            .oneshot(
                Request::get("/dashboard")
                    .header(header::COOKIE, cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("user@example.com"));
        assert!(body.contains("Painel"));
    }
}
