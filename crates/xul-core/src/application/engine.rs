//! The tree-walking interpreter.
//!
//! For every node the engine looks up the tag in its registry. A registered
//! renderer takes full control of the node, including whether to recurse.
//! An unregistered tag is handled by the [`UnknownTagPolicy`]: by default it
//! acts as a transparent grouping element whose result is the aggregate of
//! its children (text leaves yield their text).
//!
//! A pass is atomic: the first error aborts it and is returned with the
//! location of the node that failed. Nothing is caught per node.

use tracing::{debug, instrument, trace, warn};
use uuid::Uuid;

use crate::{
    application::{
        ApplicationError,
        context::{Builders, RenderContext},
        registry::RendererRegistry,
    },
    domain::{DataContext, MarkupNode, RenderResult},
    error::XulResult,
};

/// Maximum nesting depth of a render pass.
pub const MAX_DEPTH: usize = 256;

/// What the engine does with a tag that has no registered renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownTagPolicy {
    /// Render the children and aggregate their results.
    #[default]
    Passthrough,
    /// Fail the pass with [`ApplicationError::UnknownTag`].
    Reject,
}

#[derive(Debug)]
pub struct Engine {
    registry: RendererRegistry,
    policy: UnknownTagPolicy,
    max_depth: usize,
}

impl Engine {
    pub fn new(registry: RendererRegistry) -> Self {
        Self {
            registry,
            policy: UnknownTagPolicy::default(),
            max_depth: MAX_DEPTH,
        }
    }

    pub fn with_policy(mut self, policy: UnknownTagPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn policy(&self) -> UnknownTagPolicy {
        self.policy
    }

    pub fn registry(&self) -> &RendererRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut RendererRegistry {
        &mut self.registry
    }

    /// Run one render pass over `root`.
    ///
    /// `data` is read by attribute bindings; `builders` are shared with every
    /// renderer of the pass and stay populated for the caller afterwards.
    #[instrument(skip_all, fields(pass = %Uuid::new_v4(), root = %root.tag()))]
    pub fn render(
        &self,
        root: &MarkupNode,
        data: &DataContext,
        builders: &mut Builders,
    ) -> XulResult<RenderResult> {
        let mut ctx = RenderContext::new(self, data, builders);
        let result = self.dispatch(root, 0, &mut ctx);

        match &result {
            Ok(_) => debug!(nodes = root.node_count(), "Render pass completed"),
            Err(e) => warn!(error = %e, "Render pass aborted"),
        }
        result
    }

    /// Render one node within an ongoing pass.
    ///
    /// `index` is the node's position among its siblings and only shows up
    /// in error locations.
    pub fn render_node(
        &self,
        node: &MarkupNode,
        index: usize,
        ctx: &mut RenderContext<'_>,
    ) -> XulResult<RenderResult> {
        self.dispatch(node, index, ctx)
    }

    /// Render the children of `node` in document order and aggregate them.
    pub fn render_children(
        &self,
        node: &MarkupNode,
        ctx: &mut RenderContext<'_>,
    ) -> XulResult<RenderResult> {
        let mut aggregate = RenderResult::Void;
        for (index, child) in node.children().iter().enumerate() {
            aggregate = aggregate.merge(self.dispatch(child, index, ctx)?);
        }
        Ok(aggregate)
    }

    fn dispatch(
        &self,
        node: &MarkupNode,
        index: usize,
        ctx: &mut RenderContext<'_>,
    ) -> XulResult<RenderResult> {
        if let Err(e) = ctx.enter(node.tag(), index, self.max_depth) {
            return Err(e.at_node(ctx.location(), node.tag()));
        }

        let result = self
            .invoke(node, ctx)
            .map_err(|e| e.at_node(ctx.location(), node.tag()));

        ctx.leave();
        result
    }

    fn invoke(&self, node: &MarkupNode, ctx: &mut RenderContext<'_>) -> XulResult<RenderResult> {
        match self.registry.lookup(node.tag()) {
            Some(renderer) => {
                trace!(tag = node.tag(), path = %ctx.location(), "Dispatching");
                renderer.render(node, ctx)
            }
            None => self.passthrough(node, ctx),
        }
    }

    fn passthrough(&self, node: &MarkupNode, ctx: &mut RenderContext<'_>) -> XulResult<RenderResult> {
        if let Some(text) = node.text_content() {
            return Ok(if text.is_empty() {
                RenderResult::Void
            } else {
                RenderResult::fragment(text)
            });
        }

        if self.policy == UnknownTagPolicy::Reject {
            return Err(ApplicationError::UnknownTag {
                tag: node.tag().to_string(),
            }
            .into());
        }

        trace!(tag = node.tag(), "Passthrough");
        self.render_children(node, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Attributes, ColumnSpec, DomainError, Grid, attributes};
    use crate::error::XulError;

    #[derive(Debug, Default)]
    struct Counter(usize);

    fn el(tag: &str) -> MarkupNode {
        MarkupNode::new(tag).unwrap()
    }

    fn pass(engine: &Engine, root: &MarkupNode) -> XulResult<RenderResult> {
        engine.render(root, &DataContext::new(), &mut Builders::new())
    }

    /// Registry with a conditional block and a counting `tick` leaf.
    fn counting_registry() -> RendererRegistry {
        let mut registry = RendererRegistry::new();
        registry
            .register_fn("block", |node, ctx| {
                let children = ctx.render_children(node)?;
                if attributes::get_bool(node, "display", true) {
                    Ok(children)
                } else {
                    Ok(RenderResult::Void)
                }
            })
            .register_fn("tick", |_, ctx| {
                ctx.require_builder::<Counter>("tick")?.0 += 1;
                Ok(RenderResult::fragment("*"))
            });
        registry
    }

    #[test]
    fn unknown_tags_pass_text_through_in_order() {
        let engine = Engine::new(RendererRegistry::new());
        let root = el("page")
            .with_child(MarkupNode::text("a"))
            .with_child(
                el("section")
                    .with_child(MarkupNode::text("b"))
                    .with_child(el("empty"))
                    .with_child(MarkupNode::text("c")),
            )
            .with_child(MarkupNode::text("d"));

        assert_eq!(pass(&engine, &root).unwrap(), RenderResult::fragment("abcd"));
    }

    #[test]
    fn passthrough_is_associative() {
        let engine = Engine::new(RendererRegistry::new());
        let first = el("x").with_child(MarkupNode::text("1")).with_child(MarkupNode::text("2"));
        let second = el("y").with_child(MarkupNode::text("3"));
        let parent = el("p").with_child(first.clone()).with_child(second.clone());

        let whole = pass(&engine, &parent).unwrap();
        let parts = pass(&engine, &first)
            .unwrap()
            .merge(pass(&engine, &second).unwrap());
        assert_eq!(whole, parts);
    }

    #[test]
    fn empty_leaf_renders_void() {
        let engine = Engine::new(RendererRegistry::new());
        assert_eq!(pass(&engine, &el("nothing")).unwrap(), RenderResult::Void);
    }

    #[test]
    fn hidden_block_still_runs_children() {
        let engine = Engine::new(counting_registry());
        let root = el("block")
            .with_attribute("display", "false")
            .with_child(el("tick"))
            .with_child(el("wrapper").with_child(el("tick")));

        let mut builders = Builders::new().with(Counter::default());
        let result = engine
            .render(&root, &DataContext::new(), &mut builders)
            .unwrap();

        assert_eq!(result, RenderResult::Void);
        assert_eq!(builders.get::<Counter>().unwrap().0, 2);
    }

    #[test]
    fn visible_block_returns_children() {
        let engine = Engine::new(counting_registry());
        let root = el("block").with_child(el("tick")).with_child(el("tick"));
        let mut builders = Builders::new().with(Counter::default());
        let result = engine
            .render(&root, &DataContext::new(), &mut builders)
            .unwrap();
        assert_eq!(result, RenderResult::fragment("**"));
    }

    #[test]
    fn renderer_error_aborts_pass_with_location() {
        let mut registry = RendererRegistry::new();
        registry.register_fn("cell", |_, ctx| {
            ctx.require_builder::<Grid>("cell")?
                .set_row_cell("age", "36", Attributes::new())?;
            Ok(RenderResult::Void)
        });
        let engine = Engine::new(registry);
        let root = el("grid")
            .with_child(el("row"))
            .with_child(el("row").with_child(el("cell")));

        let mut builders = Builders::new().with(Grid::new());
        let err = engine
            .render(&root, &DataContext::new(), &mut builders)
            .unwrap_err();

        assert_eq!(err.location(), Some(("grid[0]/row[1]/cell[0]", "cell")));
        assert!(matches!(
            err.root(),
            XulError::Domain(DomainError::GridStateViolation { .. })
        ));
    }

    #[test]
    fn render_node_reports_the_sibling_index() {
        let mut registry = RendererRegistry::new();
        registry
            .register_fn("list", |node, ctx| {
                let mut aggregate = RenderResult::Void;
                for (index, child) in node.children().iter().enumerate() {
                    aggregate = aggregate.merge(ctx.render_node(child, index)?);
                }
                Ok(aggregate)
            })
            .register_fn("broken", |node, _| {
                Err(ApplicationError::renderer(node.tag(), "cannot render").into())
            });
        let engine = Engine::new(registry);
        let root = el("list")
            .with_child(MarkupNode::text("ok"))
            .with_child(el("broken"));

        let err = pass(&engine, &root).unwrap_err();
        assert_eq!(err.location(), Some(("list[0]/broken[1]", "broken")));
    }

    #[test]
    fn missing_builder_is_reported() {
        let engine = Engine::new(counting_registry());
        let err = pass(&engine, &el("tick")).unwrap_err();
        assert!(matches!(
            err.root(),
            XulError::Application(ApplicationError::MissingBuilder { builder: "Counter", .. })
        ));
    }

    #[test]
    fn reject_policy_fails_on_unknown_tag() {
        let engine = Engine::new(counting_registry()).with_policy(UnknownTagPolicy::Reject);
        let root = el("block").with_child(MarkupNode::text("ok")).with_child(el("mystery"));
        let err = pass(&engine, &root).unwrap_err();
        assert_eq!(err.location(), Some(("block[0]/mystery[1]", "mystery")));
        assert!(matches!(
            err.root(),
            XulError::Application(ApplicationError::UnknownTag { tag }) if tag == "mystery"
        ));
    }

    #[test]
    fn later_registration_is_used() {
        let mut registry = RendererRegistry::new();
        registry
            .register_fn("label", |_, _| Ok(RenderResult::fragment("old")))
            .register_fn("label", |_, _| Ok(RenderResult::fragment("new")));
        let engine = Engine::new(registry);
        assert_eq!(pass(&engine, &el("label")).unwrap(), RenderResult::fragment("new"));
    }

    #[test]
    fn structured_results_reach_the_parent() {
        let mut registry = RendererRegistry::new();
        registry.register_fn("column", |node, ctx| {
            Ok(RenderResult::Column(ColumnSpec {
                key: attributes::get(node, "key", ""),
                attributes: ctx.parsed_attributes(node),
            }))
        });
        let engine = Engine::new(registry);
        let root = el("group")
            .with_child(el("column").with_attribute("key", "a"))
            .with_child(MarkupNode::text("between"))
            .with_child(el("column").with_attribute("key", "b"));

        let result = pass(&engine, &root).unwrap();
        let keys: Vec<_> = result.columns().iter().map(|c| c.key.clone()).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(result.text(), "between");
    }

    #[test]
    fn depth_limit_is_enforced() {
        let engine = Engine::new(RendererRegistry::new()).with_max_depth(3);
        let deep = el("a").with_child(el("b").with_child(el("c").with_child(el("d"))));
        let err = pass(&engine, &deep).unwrap_err();
        assert!(matches!(
            err.root(),
            XulError::Application(ApplicationError::DepthExceeded { limit: 3 })
        ));

        let shallow = el("a").with_child(el("b").with_child(el("c")));
        assert!(pass(&engine, &shallow).is_ok());
    }
}
