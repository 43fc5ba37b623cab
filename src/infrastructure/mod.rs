//! Infrastructure layer - Service implementations and process setup

pub mod logging;
pub mod user;
