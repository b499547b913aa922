//! `<row>`: one body row.

use xul_core::{
    application::{RenderContext, Renderer},
    domain::{Grid, MarkupNode, RenderResult},
    error::XulResult,
};

/// Appends a body row carrying the element's attributes, makes it the active
/// row, then renders the children (typically `<cell>`s) into it.
#[derive(Debug, Default, Clone, Copy)]
pub struct RowRenderer;

impl RowRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for RowRenderer {
    fn render(&self, node: &MarkupNode, ctx: &mut RenderContext<'_>) -> XulResult<RenderResult> {
        let attributes = ctx.parsed_attributes(node);
        ctx.require_builder::<Grid>(node.tag())?
            .add_row(attributes, false);

        ctx.render_children(node)?;
        Ok(RenderResult::Void)
    }
}
