//! Application layer errors.
//!
//! These errors represent failures while dispatching and running renderers.
//! Structural problems with markup, data or builders are `DomainError`s from
//! `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors raised during a render pass.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// A renderer hit an unrecoverable condition.
    #[error("Renderer for <{tag}> failed: {reason}")]
    RendererFailure { tag: String, reason: String },

    /// No renderer is registered for the tag and the engine rejects unknown tags.
    #[error("No renderer registered for <{tag}>")]
    UnknownTag { tag: String },

    /// A renderer needs a builder the caller did not supply.
    #[error("<{tag}> requires a {builder} builder in the render context")]
    MissingBuilder { tag: String, builder: &'static str },

    /// The markup nests deeper than the engine allows.
    #[error("Markup nesting exceeds {limit} levels")]
    DepthExceeded { limit: usize },
}

impl ApplicationError {
    /// Shorthand for [`ApplicationError::RendererFailure`].
    pub fn renderer(tag: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::RendererFailure {
            tag: tag.into(),
            reason: reason.into(),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::RendererFailure { tag, .. } => vec![
                format!("Check the attributes of the <{}> element", tag),
                "Re-run with -v for the failing node path".into(),
            ],
            Self::UnknownTag { tag } => vec![
                format!("<{}> is not a known control", tag),
                "Try: xul tags to list registered controls".into(),
                "Or drop --strict to treat unknown tags as grouping elements".into(),
            ],
            Self::MissingBuilder { builder, .. } => vec![
                format!("Insert a {} into the render builders before rendering", builder),
            ],
            Self::DepthExceeded { limit } => vec![
                format!("Flatten the markup below {} nested levels", limit),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::RendererFailure { .. } | Self::UnknownTag { .. } => ErrorCategory::Authoring,
            Self::DepthExceeded { .. } => ErrorCategory::Validation,
            Self::MissingBuilder { .. } => ErrorCategory::Configuration,
        }
    }
}
