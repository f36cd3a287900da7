//! Registration redirect handlers.
//!
//! `/register` exists only to forward old links to the canonical
//! registration route. The registration flow itself is handled by the
//! platform backend.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::Redirect;

use crate::filters;

/// Redirect to the canonical registration route.
///
/// GET /register
pub async fn register_redirect() -> Redirect {
    Redirect::permanent("/register-company")
}

/// Company registration landing page template.
#[derive(Template, WebTemplate)]
#[template(path = "register_company.html")]
pub struct RegisterCompanyTemplate;

/// Company registration landing page.
///
/// GET /register-company
pub async fn register_company() -> RegisterCompanyTemplate {
    RegisterCompanyTemplate
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    use crate::routes::test_support::{body_text, test_app};
    use crate::services::session::stub::{LoginOutcome, StubSessionProvider};

    #[tokio::test]
    async fn test_register_redirects_to_canonical_route() {
        let app = test_app(Arc::new(StubSessionProvider::new(LoginOutcome::Reject)));

        let response = app
            .oneshot(Request::get("/register").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/register-company");
    }

    #[tokio::test]
    async fn test_register_company_page_renders() {
        let app = test_app(Arc::new(StubSessionProvider::new(LoginOutcome::Reject)));

        let response = app
            .oneshot(Request::get("/register-company").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("Cadastre sua empresa"));
    }
}
