//! Error types for bril-ssa
//!
//! Two failure classes matter to callers: the input program broke a
//! precondition (malformed IR), or the transformation itself broke one of
//! its own guarantees (internal). Everything else is plumbing.

use std::fmt;
use thiserror::Error;

use crate::config::ConfigError;

/// Error kind categorization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input program violates a precondition
    MalformedIr,
    /// A transformation invariant was violated (bug in this crate)
    Internal,
    /// IO errors
    IO,
    /// JSON (de)serialization errors
    Serialization,
    /// Configuration errors
    Config,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::MalformedIr => "malformed_ir",
            ErrorKind::Internal => "internal",
            ErrorKind::IO => "io",
            ErrorKind::Serialization => "serialization",
            ErrorKind::Config => "config",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for bril-ssa operations
#[derive(Debug, Error)]
pub enum SsaError {
    /// Malformed input IR
    #[error("Malformed input IR: {0}")]
    MalformedIr(String),

    /// Internal invariant violation
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error")]
    Config(#[from] ConfigError),
}

impl SsaError {
    /// Create a malformed-input error
    pub fn malformed(msg: impl Into<String>) -> Self {
        SsaError::MalformedIr(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        SsaError::Internal(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            SsaError::MalformedIr(_) => ErrorKind::MalformedIr,
            SsaError::Internal(_) => ErrorKind::Internal,
            SsaError::Io(_) => ErrorKind::IO,
            SsaError::Json(_) => ErrorKind::Serialization,
            SsaError::Config(_) => ErrorKind::Config,
        }
    }

    /// True when the failure was caused by the input document rather than
    /// by this crate or its environment.
    pub fn is_input_error(&self) -> bool {
        matches!(self.kind(), ErrorKind::MalformedIr | ErrorKind::Serialization)
    }
}

/// Result type alias for bril-ssa operations
pub type Result<T> = std::result::Result<T, SsaError>;
