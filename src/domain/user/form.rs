//! Registration form and its field-level validation result

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use super::validation::{password_constraint, username_constraint};

/// Backing object of the registration form.
///
/// Missing fields bind to empty strings so that an incomplete submission
/// reaches validation instead of failing at binding time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
#[serde(default)]
pub struct UserForm {
    #[validate(custom(function = "username_constraint"))]
    pub username: String,

    #[validate(custom(function = "password_constraint"))]
    pub password: String,
}

impl UserForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Run the declared constraints and collect every violation
    pub fn check(&self) -> FieldErrors {
        match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(errors) => FieldErrors::from(errors),
        }
    }
}

/// A single rejected field value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub code: String,
    pub message: String,
}

/// Ordered collection of field errors for one form submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Record an error against `field`
    pub fn reject_value(
        &mut self,
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.errors.push(FieldError {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        });
    }

    pub fn has_field_error(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    pub fn messages_for(&self, field: &str) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message.as_str())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(report: ValidationErrors) -> Self {
        let mut fields: Vec<_> = report.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let mut errors = FieldErrors::new();

        for (field, violations) in fields {
            for violation in violations.iter() {
                let message = violation
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));

                errors.reject_value(field.to_string(), violation.code.to_string(), message);
            }
        }

        errors
    }
}
