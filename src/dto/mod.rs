//! DTO modules that bridge services with templates and APIs.

pub mod api;
pub mod dashboard;
pub mod favorites;
pub mod notices;
pub mod notifications;
pub mod tracking;
