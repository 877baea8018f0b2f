//! Domain error type.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
///
/// The `Unknown*` variants are only produced by the `FromStr` parsers. Style
/// resolution swallows them and falls back to the default template.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Style parsing
    // ========================================================================
    #[error("unknown color '{0}'")]
    UnknownColor(String),

    #[error("unknown intensity '{0}'")]
    UnknownIntensity(String),

    #[error("unknown semantic level '{0}'")]
    UnknownLevel(String),

    // ========================================================================
    // Project validation
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Invalid placeholder file '{file}': must be a plain file name")]
    InvalidPlaceholder { file: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownColor(_) => vec![
                "Colors: black, red, green, yellow, blue, magenta, cyan, white".into(),
            ],
            Self::UnknownIntensity(_) => vec!["Intensities: dim, normal, intense".into()],
            Self::UnknownLevel(_) => vec![
                "Levels: info, success, error, response, warn, debug".into(),
            ],
            Self::InvalidProjectName { name, reason } => vec![
                format!("Project name '{}' is invalid: {}", name, reason),
                "Use alphanumeric characters, hyphens, and underscores".into(),
                "Examples: my-api, my_app, backend123".into(),
            ],
            Self::InvalidPlaceholder { file } => vec![
                format!("'{}' is not a plain file name", file),
                "Set scaffold.placeholder_file to something like server.js".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidPlaceholder { .. } => ErrorCategory::Configuration,
            _ => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
}
