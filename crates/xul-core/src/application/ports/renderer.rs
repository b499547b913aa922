//! The per-tag renderer capability.

use std::fmt;

use crate::application::context::RenderContext;
use crate::domain::{MarkupNode, RenderResult};
use crate::error::XulResult;

/// Renders one markup element.
///
/// A renderer decides on its own whether and how to recurse into the node's
/// children (through [`RenderContext::render_children`]), and may read or
/// write the builders carried by the context. Returning an error aborts the
/// whole render pass.
pub trait Renderer: Send + Sync {
    fn render(&self, node: &MarkupNode, ctx: &mut RenderContext<'_>) -> XulResult<RenderResult>;
}

/// Adapter that lets a plain function act as a [`Renderer`].
///
/// Built by [`RendererRegistry::register_fn`](crate::application::RendererRegistry::register_fn).
pub struct FnRenderer<F>(pub F);

impl<F> Renderer for FnRenderer<F>
where
    F: Fn(&MarkupNode, &mut RenderContext<'_>) -> XulResult<RenderResult> + Send + Sync,
{
    fn render(&self, node: &MarkupNode, ctx: &mut RenderContext<'_>) -> XulResult<RenderResult> {
        (self.0)(node, ctx)
    }
}

impl<F> fmt::Debug for FnRenderer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnRenderer")
    }
}
