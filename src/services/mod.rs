//! Page services: orchestrate repository calls and shape template data.

pub mod api;
pub mod auth;
pub mod dashboard;
pub mod errors;
pub mod favorites;
pub mod notices;
pub mod notifications;
pub mod tracking;

pub use errors::{ServiceError, ServiceResult};
