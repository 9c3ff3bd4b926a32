//! Form and query-string definitions backing the web routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod auth;
pub mod notices;
pub mod tracking;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid status")]
    InvalidStatus,

    #[error("invalid task title")]
    InvalidTitle,
}
