//! Built-in controls.
//!
//! | Tag      | Renderer           | Result                         |
//! |----------|--------------------|--------------------------------|
//! | `block`  | [`BlockRenderer`]  | children, or nothing if hidden |
//! | `grid`   | [`GridRenderer`]   | the grid as an HTML table      |
//! | `head`   | [`HeadRenderer`]   | nothing; adds the header row   |
//! | `column` | [`ColumnRenderer`] | a column definition            |
//! | `row`    | [`RowRenderer`]    | nothing; adds a body row       |
//! | `cell`   | [`CellRenderer`]   | nothing; fills the active row  |

mod block;
pub mod grid;

pub use block::BlockRenderer;
pub use grid::{CellRenderer, ColumnRenderer, GridRenderer, HeadRenderer, RowRenderer};

use xul_core::application::RendererRegistry;

/// Tags registered by [`register_builtin`], sorted.
pub const BUILTIN_TAGS: [&str; 6] = ["block", "cell", "column", "grid", "head", "row"];

/// Register every built-in control into `registry`.
///
/// Existing registrations for the same tags are replaced; register custom
/// overrides afterwards to win over the built-ins.
pub fn register_builtin(registry: &mut RendererRegistry) -> &mut RendererRegistry {
    registry
        .register("block", BlockRenderer::new())
        .register("grid", GridRenderer::new())
        .register("head", HeadRenderer::new())
        .register("column", ColumnRenderer::new())
        .register("row", RowRenderer::new())
        .register("cell", CellRenderer::new())
}

/// A registry holding exactly the built-in controls.
pub fn standard_registry() -> RendererRegistry {
    let mut registry = RendererRegistry::new();
    register_builtin(&mut registry);
    registry
}
