//! Grid controls.
//!
//! ```xml
//! <grid class="table">
//!   <head>
//!     <column key="name" title="Name"/>
//!     <column key="age" title="Age" width="10"/>
//!   </head>
//!   <row>
//!     <cell key="name" value="{{ user.name }}"/>
//!     <cell key="age" value="{{ user.age }}"/>
//!   </row>
//! </grid>
//! ```
//!
//! All of them write into the [`Grid`] builder of the render context. Each
//! `<grid>` element gets a fresh builder for its own subtree, so two grids in
//! one document never see each other's rows or columns. The first grid to
//! finish is handed back to the pass as its output model.

mod cell;
mod column;
mod head;
mod row;

pub use cell::CellRenderer;
pub use column::ColumnRenderer;
pub use head::HeadRenderer;
pub use row::RowRenderer;

use xul_core::{
    application::{ApplicationError, RenderContext, Renderer},
    domain::{Grid, MarkupNode, RenderResult},
    error::XulResult,
};

/// Renders its children for their effect on the grid, then emits the grid
/// as an HTML table. The element's own attributes go on the `<table>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct GridRenderer;

impl GridRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for GridRenderer {
    fn render(&self, node: &MarkupNode, ctx: &mut RenderContext<'_>) -> XulResult<RenderResult> {
        let outer = ctx.builders_mut().remove::<Grid>().ok_or_else(|| {
            ApplicationError::MissingBuilder {
                tag: node.tag().to_string(),
                builder: "Grid",
            }
        })?;

        ctx.builders_mut().insert(Grid::new());
        let rendered = ctx.render_children(node);
        let grid = ctx.builders_mut().remove::<Grid>().unwrap_or_default();

        let html = grid.to_html(&ctx.parsed_attributes(node));
        let restored = if outer.is_empty() { grid } else { outer };
        ctx.builders_mut().insert(restored);

        rendered?;
        Ok(RenderResult::fragment(html))
    }
}

/// The interpolated, non-empty `key` attribute.
fn required_key(node: &MarkupNode, ctx: &RenderContext<'_>) -> XulResult<String> {
    ctx.attribute(node, "key")
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| ApplicationError::renderer(node.tag(), "missing required attribute 'key'").into())
}
