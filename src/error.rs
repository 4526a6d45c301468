//! Application-level error types.

use thiserror::Error;

use crate::types::Field;

/// Errors that can occur within the application.
///
/// Form validation failures are not errors: they travel as
/// [`crate::engine::form::ValidationErrors`] inside a submit outcome.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to start the clock runtime: {0}")]
    Runtime(#[from] std::io::Error),

    #[error("JSON serialisation error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid argument: {0}")]
    Config(String),

    #[error("palette must contain at least one color")]
    EmptyPalette,

    #[error("field `{}` is not editable right now", .0.name())]
    FieldLocked(Field),
}

/// Convenience alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;
