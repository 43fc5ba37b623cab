//! Registration collaborator consumed by the auth pages

use async_trait::async_trait;

use super::entity::User;
use super::form::UserForm;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// User management operations the web layer delegates to
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a new account from an already validated form.
    ///
    /// Any `Err` is reported back to the visitor as a username error
    /// carrying [`DomainError::message`].
    async fn register_user(&self, form: &UserForm) -> Result<User, DomainError>;
}
