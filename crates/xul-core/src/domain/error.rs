// ============================================================================
// domain/error.rs - MARKUP, DATA AND GRID ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel inside render results and node-located wrappers)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Markup Errors
    // ========================================================================
    #[error("Invalid markup at byte {offset}: {reason}")]
    InvalidMarkup { offset: usize, reason: String },

    #[error("Markup element has an empty tag name")]
    EmptyTagName,

    // ========================================================================
    // Data Context Errors
    // ========================================================================
    #[error("Invalid data context: {0}")]
    InvalidDataContext(String),

    // ========================================================================
    // Builder State Violations
    // ========================================================================
    #[error("Grid state violation on column '{column}': {reason}")]
    GridStateViolation { column: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidMarkup { offset, .. } => vec![
                format!("Check the markup around byte {}", offset),
                "Every element needs a matching closing tag or a trailing '/>'".into(),
            ],
            Self::EmptyTagName => vec!["Give every element a tag name, e.g. <block>".into()],
            Self::InvalidDataContext(msg) => vec![
                "The data document root must be an object".into(),
                format!("Details: {}", msg),
            ],
            Self::GridStateViolation { column, .. } => vec![
                format!("Declare column '{}' in a <head> before writing cells", column),
                "Cells must sit inside a <row> (or after a <head>)".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidMarkup { .. } | Self::EmptyTagName | Self::InvalidDataContext(_) => {
                ErrorCategory::Validation
            }
            Self::GridStateViolation { .. } => ErrorCategory::Authoring,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Authoring,
}
