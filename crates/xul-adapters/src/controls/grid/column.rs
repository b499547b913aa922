//! `<column>`: one column definition.

use xul_core::{
    application::{RenderContext, Renderer},
    domain::{ColumnSpec, Grid, MarkupNode, RenderResult},
    error::XulResult,
};

use super::required_key;

/// Hands its `key` and interpolated attributes to the enclosing control and
/// declares the column in the grid, when one is present.
///
/// The declaration happens here, not only in `<head>`, so a column inside a
/// hidden `<block>` is still registered.
#[derive(Debug, Default, Clone, Copy)]
pub struct ColumnRenderer;

impl ColumnRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for ColumnRenderer {
    fn render(&self, node: &MarkupNode, ctx: &mut RenderContext<'_>) -> XulResult<RenderResult> {
        let key = required_key(node, ctx)?;

        let mut attributes = ctx.parsed_attributes(node);
        attributes.remove("key");

        if let Some(grid) = ctx.builder_mut::<Grid>() {
            let mut declared = attributes.clone();
            declared.remove("title");
            grid.add_column(key.as_str(), declared);
        }

        Ok(RenderResult::Column(ColumnSpec { key, attributes }))
    }
}
