//! Unified error handling for Xul Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, adds the location of the failing markup node, and offers
//! user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Xul Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum XulError {
    /// Errors from the domain layer (markup, data, builder state).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (dispatch and renderer failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// An error raised while rendering a specific node.
    ///
    /// `path` locates the node from the root, e.g. `grid[0]/head[0]/column[1]`.
    #[error("{source} (at {path})")]
    AtNode {
        path: String,
        tag: String,
        source: Box<XulError>,
    },

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl XulError {
    /// Attach a node location unless one is already attached.
    ///
    /// The innermost location wins: it names the node that actually failed.
    pub fn at_node(self, path: impl Into<String>, tag: impl Into<String>) -> Self {
        match self {
            located @ Self::AtNode { .. } => located,
            other => Self::AtNode {
                path: path.into(),
                tag: tag.into(),
                source: Box::new(other),
            },
        }
    }

    /// The error with any location wrapper removed.
    pub fn root(&self) -> &XulError {
        match self {
            Self::AtNode { source, .. } => source.root(),
            other => other,
        }
    }

    /// `(path, tag)` of the failing node, when known.
    pub fn location(&self) -> Option<(&str, &str)> {
        match self {
            Self::AtNode { path, tag, .. } => Some((path.as_str(), tag.as_str())),
            _ => None,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::AtNode { path, source, .. } => {
                let mut suggestions = vec![format!("Failing node: {}", path)];
                suggestions.extend(source.suggestions());
                suggestions
            }
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in Xul".into(),
                "Please report this issue with the markup that triggered it".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Authoring => ErrorCategory::Authoring,
            },
            Self::Application(e) => e.category(),
            Self::AtNode { source, .. } => source.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Malformed input (markup text, data document).
    Validation,
    /// Well-formed markup that uses controls incorrectly.
    Authoring,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type XulResult<T> = Result<T, XulError>;
