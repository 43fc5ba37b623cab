use axum::{response::Redirect, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::auth;
use super::health;
use super::state::AppState;

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        // Login, registration and home pages
        .merge(auth::create_auth_router())
        .route("/", get(|| async { Redirect::to("/login") }))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use tower::ServiceExt;

    use crate::domain::user::MockUserService;
    use crate::domain::DomainError;
    use crate::infrastructure::user::{Argon2Hasher, DefaultUserService, InMemoryUserRepository};

    fn app() -> Router {
        let service = DefaultUserService::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(Argon2Hasher::new()),
        );
        create_router(AppState::new(Arc::new(service)))
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_form(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/register")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_get_login() {
        let response = app().oneshot(get("/login")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("<h1>Login</h1>"));
        assert!(!html.contains("Registration successful"));
    }

    #[tokio::test]
    async fn test_get_login_after_registration() {
        let response = app().oneshot(get("/login?registered")).await.unwrap();
        assert!(body_text(response).await.contains("Registration successful"));
    }

    #[tokio::test]
    async fn test_get_register() {
        let response = app().oneshot(get("/register")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("<h1>Register</h1>"));
        assert!(html.contains(r#"name="username" value="""#));
    }

    #[tokio::test]
    async fn test_get_home() {
        let response = app().oneshot(get("/home")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("<h1>Home</h1>"));
    }

    #[tokio::test]
    async fn test_root_redirects_to_login() {
        let response = app().oneshot(get("/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/login");
    }

    #[tokio::test]
    async fn test_register_success_redirects() {
        let response = app()
            .oneshot(post_form("username=alice&password=correct-horse"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/login?registered");
    }

    #[tokio::test]
    async fn test_register_duplicate_shows_username_error() {
        let app = app();

        let first = app
            .clone()
            .oneshot(post_form("username=alice&password=correct-horse"))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::SEE_OTHER);

        let second = app
            .oneshot(post_form("username=alice&password=another-password"))
            .await
            .unwrap();

        assert_eq!(second.status(), StatusCode::OK);
        let html = body_text(second).await;
        assert!(html.contains(r#"data-field="username">Username &#x27;alice&#x27; already exists"#));
        assert!(html.contains(r#"value="alice""#));
    }

    #[tokio::test]
    async fn test_register_missing_field_never_calls_service() {
        let mut service = MockUserService::new();
        service.expect_register_user().never();
        let app = create_router(AppState::new(Arc::new(service)));

        let response = app.oneshot(post_form("username=alice")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("<h1>Register</h1>"));
        assert!(html.contains(r#"data-field="password">Password is required"#));
    }

    #[tokio::test]
    async fn test_register_service_failure_message_is_shown() {
        let mut service = MockUserService::new();
        service
            .expect_register_user()
            .times(1)
            .returning(|_| Err(DomainError::internal("Registration is closed")));
        let app = create_router(AppState::new(Arc::new(service)));

        let response = app
            .oneshot(post_form("username=alice&password=correct-horse"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::LOCATION).is_none());
        assert!(body_text(response)
            .await
            .contains(r#"data-field="username">Registration is closed"#));
    }

    #[tokio::test]
    async fn test_register_rejects_non_form_body() {
        let request = Request::builder()
            .method("POST")
            .uri("/register")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"username":"alice"}"#))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn test_health() {
        let response = app().oneshot(get("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains(r#""status":"healthy""#));
    }
}
