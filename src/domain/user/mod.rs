//! User domain
//!
//! This module provides domain types and traits for user registration,
//! including the registration form, its validation, user entities, and the
//! repository and service traits.

mod entity;
mod form;
mod repository;
mod service;
mod validation;

pub use entity::{User, UserId};
pub use form::{FieldError, FieldErrors, UserForm};
pub use repository::UserRepository;
pub use service::UserService;
pub use validation::{validate_password, validate_username, UserValidationError};

#[cfg(test)]
pub use repository::mock::MockUserRepository;
#[cfg(test)]
pub use service::MockUserService;
