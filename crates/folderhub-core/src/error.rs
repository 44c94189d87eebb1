//! Unified application error types for FolderHub.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The requested folder was not found.
    NotFound,
    /// The source folder of a move does not exist.
    SourceNotFound,
    /// The destination folder of a move does not exist.
    DestinationNotFound,
    /// A move attempted to cross a tenant boundary.
    CrossTenantMove,
    /// A move attempted to relocate a folder into itself.
    SelfMove,
    /// A move attempted to relocate a folder into its own subtree.
    MoveIntoOwnDescendant,
    /// Input validation failed.
    Validation,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// An I/O error occurred.
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::SourceNotFound => write!(f, "SOURCE_NOT_FOUND"),
            Self::DestinationNotFound => write!(f, "DESTINATION_NOT_FOUND"),
            Self::CrossTenantMove => write!(f, "CROSS_TENANT_MOVE"),
            Self::SelfMove => write!(f, "SELF_MOVE"),
            Self::MoveIntoOwnDescendant => write!(f, "MOVE_INTO_OWN_DESCENDANT"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Io => write!(f, "IO"),
        }
    }
}

/// The unified application error used throughout FolderHub.
///
/// All crate-specific errors are mapped into `AppError` using `From` impls
/// or explicit `.map_err()` calls. None of the kinds are retriable: every
/// failure describes a bad input, not a transient condition.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create a source-not-found error.
    pub fn source_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SourceNotFound, message)
    }

    /// Create a destination-not-found error.
    pub fn destination_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DestinationNotFound, message)
    }

    /// Create a cross-tenant-move error.
    pub fn cross_tenant_move(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CrossTenantMove, message)
    }

    /// Create a self-move error.
    pub fn self_move(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SelfMove, message)
    }

    /// Create a move-into-own-descendant error.
    pub fn move_into_own_descendant(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MoveIntoOwnDescendant, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Io, format!("I/O error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
