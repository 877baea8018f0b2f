//! Application layer errors.
//!
//! These errors represent failures in orchestration, not domain rules.
//! Domain errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while orchestrating a scaffold.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Adapter state was unusable (lock poisoned, etc.).
    #[error("Adapter state unavailable: {name}")]
    AdapterUnavailable { name: &'static str },

    /// A write failed and removing the half-made project failed too.
    ///
    /// `cause` is the original write failure.
    #[error("{cause} (rollback of {path} also failed: {reason})")]
    RollbackFailed {
        path: PathBuf,
        reason: String,
        cause: String,
    },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::AdapterUnavailable { name } => vec![
                format!("Internal component unavailable: {}", name),
                "Try again; if it persists, please report it".into(),
            ],
            Self::RollbackFailed { path, cause, .. } => vec![
                format!("Scaffolding failed: {}", cause),
                format!("A partial project may remain at {}", path.display()),
                "Remove it manually before retrying".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Internal
    }
}
