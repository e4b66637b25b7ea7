//! Error types for the board engine

use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors that can occur in board operations.
///
/// The mutation API is deliberately total: only task creation can fail, and
/// only on validation. Mutations against ids that no longer resolve are
/// silent no-ops, not errors.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Missing required field
    #[error("missing required field: {field}")]
    MissingField { field: String },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BoardError {
    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }
}
