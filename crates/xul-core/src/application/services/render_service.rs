//! Render Service - main application orchestrator.
//!
//! Coordinates one document render:
//! 1. Parse markup text through the [`MarkupSource`] port
//! 2. Run a render pass with a fresh [`Grid`] builder
//! 3. Hand back the emitted fragment together with the populated grid

use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    application::{
        context::Builders,
        engine::Engine,
        ports::MarkupSource,
    },
    domain::{DataContext, Grid, MarkupNode},
    error::XulResult,
};

/// Everything a finished render pass produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderOutput {
    /// Fragment text of the root result; empty when the root rendered `Void`.
    pub html: String,
    pub grid: Grid,
}

/// Shape of a parsed document, as reported by `check`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkupStats {
    pub root: String,
    pub nodes: usize,
    pub depth: usize,
    /// Element tags without a registered renderer, sorted and deduplicated.
    pub unknown_tags: Vec<String>,
}

pub struct RenderService {
    source: Box<dyn MarkupSource>,
    engine: Engine,
}

impl RenderService {
    pub fn new(source: Box<dyn MarkupSource>, engine: Engine) -> Self {
        Self { source, engine }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Parse `markup` and render it against `data`.
    #[instrument(skip_all, fields(bytes = markup.len()))]
    pub fn render_str(&self, markup: &str, data: &DataContext) -> XulResult<RenderOutput> {
        let root = self.source.parse(markup)?;
        self.render_tree(&root, data)
    }

    /// Render an already parsed tree.
    pub fn render_tree(&self, root: &MarkupNode, data: &DataContext) -> XulResult<RenderOutput> {
        let mut builders = Builders::new().with(Grid::new());
        let result = self.engine.render(root, data, &mut builders)?;

        let grid = builders.remove::<Grid>().unwrap_or_default();
        info!(
            rows = grid.row_count(),
            columns = grid.columns().len(),
            "Document rendered"
        );

        Ok(RenderOutput {
            html: result.text(),
            grid,
        })
    }

    /// Parse `markup` and describe it without rendering.
    pub fn check(&self, markup: &str) -> XulResult<MarkupStats> {
        let root = self.source.parse(markup)?;
        let registry = self.engine.registry();

        let mut unknown = Vec::new();
        root.walk(&mut |node| {
            if !node.is_text() && !registry.contains(node.tag()) {
                unknown.push(node.tag().to_string());
            }
        });
        unknown.sort_unstable();
        unknown.dedup();

        Ok(MarkupStats {
            root: root.tag().to_string(),
            nodes: root.node_count(),
            depth: root.depth(),
            unknown_tags: unknown,
        })
    }
}
