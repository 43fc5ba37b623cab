//! Application state for shared services

use std::sync::Arc;

use crate::domain::UserService;

/// Application state handed to every handler.
///
/// Services are set once at construction and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
}

impl AppState {
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }
}
