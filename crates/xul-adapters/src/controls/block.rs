//! `<block>`: conditional subtree.

use tracing::trace;
use xul_core::{
    application::{RenderContext, Renderer},
    domain::{MarkupNode, RenderResult, attributes},
    error::XulResult,
};

/// Renders its children, then surfaces them only when `display` is true.
///
/// Children are rendered even when the block is hidden: `display` controls
/// what is emitted, not what is accumulated, so controls that populate a
/// shared builder (columns, rows, cells) still run.
///
/// `display` defaults to true. It may be a binding (`display="{{ user.admin }}"`),
/// in which case the resolved text is coerced; an unresolvable binding hides
/// the block.
#[derive(Debug, Default, Clone, Copy)]
pub struct BlockRenderer;

impl BlockRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for BlockRenderer {
    fn render(&self, node: &MarkupNode, ctx: &mut RenderContext<'_>) -> XulResult<RenderResult> {
        let html = ctx.render_children(node)?;

        if display(node, ctx) {
            return Ok(html);
        }

        trace!(path = %ctx.location(), "Block hidden");
        Ok(RenderResult::Void)
    }
}

fn display(node: &MarkupNode, ctx: &RenderContext<'_>) -> bool {
    match node.attribute("display") {
        Some(raw) if raw.contains("{{") => {
            let resolved = attributes::interpolate(raw, ctx.data());
            attributes::parse_bool(&resolved).unwrap_or(!resolved.trim().is_empty())
        }
        _ => attributes::get_bool(node, "display", true),
    }
}
