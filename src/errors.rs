//! Error types for the demobuddy demo session.

use thiserror::Error;

/// Main error type for demo operations
#[derive(Error, Debug)]
pub enum DemoError {
    /// Caller passed something the demo cannot work with
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Username already present in the store
    #[error("User '{username}' already exists")]
    DuplicateUser { username: String },

    /// Username not present in the store
    #[error("No such user: '{username}'")]
    UnknownUser { username: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("Demo error: {0}")]
    Generic(String),
}

/// Result type alias for demo operations
pub type Result<T> = std::result::Result<T, DemoError>;

/// Convert anyhow errors to DemoError
impl From<anyhow::Error> for DemoError {
    fn from(err: anyhow::Error) -> Self {
        DemoError::Generic(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DemoError::UnknownUser {
            username: "mallory".to_string(),
        };
        assert!(err.to_string().contains("mallory"));
    }

    #[test]
    fn test_duplicate_user_error() {
        let err = DemoError::DuplicateUser {
            username: "alice".to_string(),
        };
        assert!(err.to_string().contains("alice"));
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_anyhow_conversion() {
        let err: DemoError = anyhow::anyhow!("wrapped").into();
        assert!(err.to_string().contains("wrapped"));
    }
}
