//! Markup source adapters.

mod parser;

use tracing::{debug, instrument};
use xul_core::{
    application::{MAX_DEPTH, MarkupSource},
    domain::MarkupNode,
    error::XulResult,
};

use parser::Parser;

/// [`MarkupSource`] for XML-like Xul documents.
///
/// Whitespace-only text between elements is dropped; any other text is kept
/// verbatim (entities decoded) as a text leaf. Errors are
/// [`InvalidMarkup`](xul_core::domain::DomainError::InvalidMarkup) with the
/// byte offset of the offending construct. Elements nested deeper than the
/// engine's [`MAX_DEPTH`] are rejected the same way.
#[derive(Debug, Clone, Copy)]
pub struct XmlMarkupSource {
    max_depth: usize,
}

impl XmlMarkupSource {
    pub fn new() -> Self {
        Self {
            max_depth: MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for XmlMarkupSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkupSource for XmlMarkupSource {
    #[instrument(skip_all, fields(bytes = source.len()))]
    fn parse(&self, source: &str) -> XulResult<MarkupNode> {
        let root = Parser::new(source)
            .with_max_depth(self.max_depth)
            .parse_document()?;
        debug!(root = root.tag(), nodes = root.node_count(), "Markup parsed");
        Ok(root)
    }
}
