//! `<cell>`: one cell of the active row.

use xul_core::{
    application::{RenderContext, Renderer},
    domain::{Grid, MarkupNode, RenderResult},
    error::XulResult,
};

use super::required_key;

/// Writes a cell into the grid's active row.
///
/// Content is the interpolated `value` attribute, or the text of the rendered
/// children when `value` is absent. Writing to an undeclared column, or
/// before any row exists, fails the render.
#[derive(Debug, Default, Clone, Copy)]
pub struct CellRenderer;

impl CellRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for CellRenderer {
    fn render(&self, node: &MarkupNode, ctx: &mut RenderContext<'_>) -> XulResult<RenderResult> {
        let key = required_key(node, ctx)?;

        let content = match ctx.attribute(node, "value") {
            Some(value) => value,
            None => ctx.render_children(node)?.text(),
        };

        let mut attributes = ctx.parsed_attributes(node);
        attributes.remove("key");
        attributes.remove("value");

        ctx.require_builder::<Grid>(node.tag())?
            .set_row_cell(&key, content, attributes)?;
        Ok(RenderResult::Void)
    }
}
