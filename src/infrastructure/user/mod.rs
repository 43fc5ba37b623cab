//! User infrastructure module
//!
//! This module provides implementations for user registration, including
//! password hashing with Argon2, an in-memory repository, and the user service.

mod password;
mod repository;
mod service;

pub use password::{Argon2Hasher, PasswordHasher};
pub use repository::InMemoryUserRepository;
pub use service::DefaultUserService;
