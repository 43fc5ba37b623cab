//! Authentication pages
//!
//! Login, registration, and home pages. Registration is delegated to the
//! [`UserService`](crate::domain::UserService) held in [`AppState`]; this
//! module only picks which page to render or where to redirect.

use axum::{
    extract::{RawQuery, State},
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use tracing::{debug, info, warn};

use crate::api::state::AppState;
use crate::api::types::ValidatedForm;
use crate::api::views::{render_template, HomeView, LoginView, RegisterView};
use crate::domain::user::UserForm;

/// Where a successful registration sends the browser
pub const REGISTERED_REDIRECT: &str = "/login?registered";

/// Query marker the login page looks for
const REGISTERED_MARKER: &str = "registered";

/// Create the authentication router
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", get(login))
        .route("/register", get(show_registration_form).post(register_user))
        .route("/home", get(home))
}

/// Outcome of an auth page handler
#[derive(Debug)]
pub enum AuthPage {
    Login(LoginView),
    Register(RegisterView),
    Home(HomeView),
    Redirect(&'static str),
}

impl IntoResponse for AuthPage {
    fn into_response(self) -> Response {
        match self {
            Self::Login(view) => render_template(&view),
            Self::Register(view) => render_template(&view),
            Self::Home(view) => render_template(&view),
            Self::Redirect(to) => Redirect::to(to).into_response(),
        }
    }
}

/// Show the login page
///
/// GET /login
pub async fn login(RawQuery(query): RawQuery) -> AuthPage {
    AuthPage::Login(LoginView {
        registered: has_query_key(query.as_deref(), REGISTERED_MARKER),
    })
}

/// Show an empty registration form
///
/// GET /register
pub async fn show_registration_form() -> AuthPage {
    AuthPage::Register(RegisterView::empty())
}

/// Register a new user from the submitted form
///
/// POST /register
///
/// Redirects to the login page on success. Validation errors and
/// registration failures re-render the form; a registration failure is
/// reported on the `username` field with the service's message.
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedForm { form, mut errors }: ValidatedForm<UserForm>,
) -> AuthPage {
    if errors.has_errors() {
        debug!(errors = errors.len(), "Registration form failed validation");
        return AuthPage::Register(RegisterView::new(form, errors));
    }

    match state.user_service.register_user(&form).await {
        Ok(user) => {
            info!(user_id = %user.id(), "Registration completed");
            AuthPage::Redirect(REGISTERED_REDIRECT)
        }
        Err(e) => {
            warn!(username = %form.username, error = %e, "Registration rejected");
            errors.reject_value("username", "error.user", e.message());
            AuthPage::Register(RegisterView::new(form, errors))
        }
    }
}

/// Show the home page
///
/// GET /home
pub async fn home() -> AuthPage {
    AuthPage::Home(HomeView)
}

fn has_query_key(query: Option<&str>, key: &str) -> bool {
    query
        .unwrap_or_default()
        .split('&')
        .any(|pair| pair.split('=').next() == Some(key))
}
