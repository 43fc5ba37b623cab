//! Form extractor that binds and validates in one step

use axum::{
    extract::{rejection::FormRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Form,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::domain::user::FieldErrors;

/// A bound form together with the outcome of its declared constraints.
///
/// Validation failures do not reject the request; the handler decides what
/// to do with `errors`. Only a body that cannot be bound at all is rejected.
#[derive(Debug)]
pub struct ValidatedForm<T> {
    pub form: T,
    pub errors: FieldErrors,
}

/// Rejection for bodies that cannot be bound onto the form type
#[derive(Debug)]
pub struct FormBindingRejection {
    status: StatusCode,
    message: String,
}

impl IntoResponse for FormBindingRejection {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

impl From<FormRejection> for FormBindingRejection {
    fn from(rejection: FormRejection) -> Self {
        Self {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl<S, T> FromRequest<S> for ValidatedForm<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = FormBindingRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(form) = Form::<T>::from_request(req, state).await?;

        let errors = match form.validate() {
            Ok(()) => FieldErrors::new(),
            Err(report) => FieldErrors::from(report),
        };

        Ok(ValidatedForm { form, errors })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::UserForm;
    use axum::body::Body;
    use axum::http::{self, header::CONTENT_TYPE};

    fn form_request(body: &'static str) -> Request {
        http::Request::builder()
            .method("POST")
            .uri("/register")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_binds_valid_form() {
        let extracted =
            ValidatedForm::<UserForm>::from_request(form_request("username=alice&password=correct-horse"), &())
                .await
                .unwrap();

        assert_eq!(extracted.form, UserForm::new("alice", "correct-horse"));
        assert!(!extracted.errors.has_errors());
    }

    #[tokio::test]
    async fn test_missing_field_reaches_validation() {
        let extracted = ValidatedForm::<UserForm>::from_request(form_request("username=alice"), &())
            .await
            .unwrap();

        assert_eq!(extracted.form.password, "");
        assert!(extracted.errors.has_field_error("password"));
        assert!(!extracted.errors.has_field_error("username"));
    }

    #[tokio::test]
    async fn test_wrong_content_type_is_rejected() {
        let request = http::Request::builder()
            .method("POST")
            .uri("/register")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"username":"alice"}"#))
            .unwrap();

        let rejection = ValidatedForm::<UserForm>::from_request(request, &())
            .await
            .unwrap_err();

        assert_eq!(
            rejection.into_response().status(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
    }

    #[test]
    fn test_rejection_response() {
        let rejection = FormBindingRejection {
            status: StatusCode::BAD_REQUEST,
            message: "Failed to deserialize form".to_string(),
        };

        assert_eq!(rejection.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
