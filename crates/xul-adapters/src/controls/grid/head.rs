//! `<head>`: header row of a grid.

use xul_core::{
    application::{RenderContext, Renderer},
    domain::{Attributes, Grid, MarkupNode, RenderResult},
    error::XulResult,
};

/// Builds the grid's header row from the column definitions of its children.
///
/// The header row is inserted ahead of every body row. For each column, in
/// document order, the `title` attribute becomes the header cell text and
/// the remaining attributes are used both for the column declaration and for
/// the header cell. A head without columns still leaves an empty header row.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeadRenderer;

impl HeadRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for HeadRenderer {
    fn render(&self, node: &MarkupNode, ctx: &mut RenderContext<'_>) -> XulResult<RenderResult> {
        let cols = ctx.render_children(node)?.into_columns();

        let grid = ctx.require_builder::<Grid>(node.tag())?;
        grid.add_row(Attributes::new(), true);

        for column in cols {
            let mut attribs = column.attributes;
            let title = attribs.remove("title").unwrap_or_default();

            grid.add_column(column.key.as_str(), attribs.clone());
            grid.set_row_cell(&column.key, title, attribs)?;
        }

        Ok(RenderResult::Void)
    }
}
