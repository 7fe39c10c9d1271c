//! Constraint error types.

use thiserror::Error;

/// Result type for constraint operations.
pub type ConstraintResult<T> = Result<T, ConstraintError>;

/// Errors raised while configuring the checker. Evaluating a constraint
/// never fails.
#[derive(Debug, Error)]
pub enum ConstraintError {
    #[error("Unknown constraint: {name}")]
    UnknownConstraint { name: String },

    #[error("Invalid checker config: {message}")]
    InvalidConfig { message: String },
}

impl ConstraintError {
    pub fn unknown_constraint(name: impl Into<String>) -> Self {
        Self::UnknownConstraint { name: name.into() }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for ConstraintError {
    fn from(e: serde_json::Error) -> Self {
        Self::invalid_config(e.to_string())
    }
}
