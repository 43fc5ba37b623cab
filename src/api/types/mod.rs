//! Request extractors shared by the page handlers

pub mod form;

pub use form::{FormBindingRejection, ValidatedForm};
