// file: src/error.rs
// version: 1.0.0
// guid: 3f8a1c62-9d4e-4b07-a5d1-7c2e90f4b816

use thiserror::Error;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, BulkerError>;

/// Error types for ovpn-bulker
#[derive(Error, Debug)]
pub enum BulkerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Command execution error: {0}")]
    Execution(String),

    #[error("nmcli exited with code {code}: {stderr}")]
    Nmcli { code: i32, stderr: String },

    #[error("System error: {0}")]
    System(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BulkerError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new execution error
    pub fn execution(msg: impl Into<String>) -> Self {
        Self::Execution(msg.into())
    }

    /// Create a new system error
    pub fn system(msg: impl Into<String>) -> Self {
        Self::System(msg.into())
    }
}
