//! User service backing the registration page

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::user::{
    validate_password, validate_username, User, UserForm, UserId, UserRepository, UserService,
};
use crate::domain::DomainError;

use super::password::PasswordHasher;

/// User service for registration
#[derive(Debug)]
pub struct DefaultUserService<R: UserRepository, H: PasswordHasher> {
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R: UserRepository, H: PasswordHasher> DefaultUserService<R, H> {
    /// Create a new user service
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    /// Argon2 is CPU bound, so hashing runs on the blocking pool
    async fn hash_password(&self, password: &str) -> Result<String, DomainError>
    where
        H: 'static,
    {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_owned();

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| DomainError::internal(format!("Password hashing task failed: {}", e)))?
    }
}

#[async_trait]
impl<R: UserRepository, H: PasswordHasher + 'static> UserService for DefaultUserService<R, H> {
    async fn register_user(&self, form: &UserForm) -> Result<User, DomainError> {
        validate_username(&form.username).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_password(&form.password).map_err(|e| DomainError::validation(e.to_string()))?;

        if self.repository.username_exists(&form.username).await? {
            return Err(DomainError::conflict(format!(
                "Username '{}' already exists",
                form.username
            )));
        }

        let password_hash = self.hash_password(&form.password).await?;
        let user = User::new(UserId::generate(), &form.username, password_hash);

        let user = self.repository.create(user).await?;
        info!(
            user_id = %user.id(),
            username = %user.username(),
            created_at = %user.created_at(),
            "User registered"
        );

        Ok(user)
    }
}
