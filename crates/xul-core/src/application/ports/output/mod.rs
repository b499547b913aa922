//! Driven (output) ports - implemented by infrastructure.
//!
//! The `xul-adapters` crate provides implementations.

use crate::domain::MarkupNode;
use crate::error::XulResult;

/// Port for markup parsing.
///
/// Implemented by:
/// - `xul_adapters::markup::XmlMarkupSource` (XML-like markup text)
///
/// The engine never parses text itself; it only walks the tree returned here.
#[cfg_attr(test, mockall::automock)]
pub trait MarkupSource: Send + Sync {
    /// Parse a complete document into its root node.
    fn parse(&self, source: &str) -> XulResult<MarkupNode>;
}
