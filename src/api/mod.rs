//! API layer - HTTP endpoints, extractors and views

pub mod auth;
pub mod health;
pub mod router;
pub mod state;
pub mod types;
pub mod views;

pub use router::create_router;
pub use state::AppState;
