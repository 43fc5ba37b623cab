//! Server-rendered pages

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::error;

use crate::domain::user::{FieldErrors, UserForm};

/// `login` view
#[derive(Debug, Template)]
#[template(path = "login.html")]
pub struct LoginView {
    /// Show the "registration successful" notice
    pub registered: bool,
}

/// `register` view. The form is exposed to the template as `user`.
#[derive(Debug, Template)]
#[template(path = "register.html")]
pub struct RegisterView {
    pub user: UserForm,
    pub errors: FieldErrors,
}

impl RegisterView {
    /// Blank form for a first visit
    pub fn empty() -> Self {
        Self::new(UserForm::default(), FieldErrors::new())
    }

    pub fn new(user: UserForm, errors: FieldErrors) -> Self {
        Self { user, errors }
    }
}

/// `home` view
#[derive(Debug, Template)]
#[template(path = "home.html")]
pub struct HomeView;

/// Render a template into an HTML response; failures become a 500
pub(crate) fn render_template<T: Template>(view: &T) -> Response {
    match view.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!(error = %e, "Template rendering failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_without_notice() {
        let html = LoginView { registered: false }.render().unwrap();

        assert!(html.contains("<h1>Login</h1>"));
        assert!(!html.contains("registered-notice"));
    }

    #[test]
    fn test_login_form_does_not_submit() {
        let html = LoginView { registered: false }.render().unwrap();

        assert!(html.contains("Signing in is not available yet."));
        assert!(html.contains("<fieldset disabled>"));
        assert!(!html.contains("action="));
        assert!(!html.contains("method=\"post\""));
    }

    #[test]
    fn test_login_with_notice() {
        let html = LoginView { registered: true }.render().unwrap();
        assert!(html.contains("Registration successful"));
    }

    #[test]
    fn test_register_redisplays_username_and_errors() {
        let mut errors = FieldErrors::new();
        errors.reject_value("username", "error.user", "Username 'bob' already exists");
        let view = RegisterView::new(UserForm::new("bob", "secret-password"), errors);

        let html = view.render().unwrap();

        assert!(html.contains(r#"value="bob""#));
        assert!(html.contains("Username &#x27;bob&#x27; already exists"));
        assert!(!html.contains("secret-password"));
    }

    #[test]
    fn test_register_escapes_submitted_values() {
        let view = RegisterView::new(UserForm::new("<script>", ""), FieldErrors::new());
        let html = view.render().unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_empty_register_view() {
        let view = RegisterView::empty();

        assert_eq!(view.user, UserForm::default());
        assert!(!view.errors.has_errors());
        assert!(!view.render().unwrap().contains("field-error\""));
    }

    #[test]
    fn test_render_template_is_html() {
        let response = render_template(&HomeView);

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["content-type"],
            "text/html; charset=utf-8"
        );
    }
}
