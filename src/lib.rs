//! Basic web
//!
//! Server-rendered login, registration and home pages. Registration is
//! validated at the form level and then delegated to a user service.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::user::{Argon2Hasher, DefaultUserService, InMemoryUserRepository};
use tracing::info;

/// Create the application state with the default user service
pub fn create_app_state() -> AppState {
    let repository = Arc::new(InMemoryUserRepository::new());
    let hasher = Arc::new(Argon2Hasher::new());
    let user_service = DefaultUserService::new(repository, hasher);

    info!("Using in-memory user storage");

    AppState::new(Arc::new(user_service))
}
