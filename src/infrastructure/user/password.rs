//! Argon2 hashing for newly registered passwords

use std::fmt::Debug;

use argon2::password_hash::{rand_core::OsRng, PasswordHasher as _, SaltString};
use argon2::Argon2;

use crate::domain::DomainError;

/// Turns a plaintext password into a PHC string that is safe to store
pub trait PasswordHasher: Send + Sync + Debug {
    fn hash(&self, password: &str) -> Result<String, DomainError>;
}

/// Argon2id with the crate defaults and a fresh random salt per call
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        let salt = SaltString::generate(&mut OsRng);

        let phc = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| DomainError::internal(format!("Failed to hash password: {}", e)))?;

        Ok(phc.to_string())
    }
}
