//! Per-pass render context.
//!
//! A [`RenderContext`] bundles what every renderer invocation may touch: the
//! read-only [`DataContext`], the shared mutable [`Builders`], a back
//! reference to the [`Engine`] for recursion, and the path of the node being
//! rendered. It is created once per pass and handed down the call tree by
//! `&mut`, so two passes can never share the same builders at once.

use std::{
    any::{Any, TypeId, type_name},
    collections::HashMap,
    fmt,
};

use crate::{
    application::{ApplicationError, engine::Engine},
    domain::{Attributes, DataContext, MarkupNode, RenderResult, attributes},
    error::XulResult,
};

// ── Builders ─────────────────────────────────────────────────────────────────

/// Typed set of shared builders, at most one per type.
///
/// The standard builder is [`Grid`](crate::domain::Grid); embedding
/// applications may insert their own.
#[derive(Default)]
pub struct Builders {
    slots: HashMap<TypeId, Box<dyn Any>>,
}

impl Builders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<T: Any>(mut self, builder: T) -> Self {
        self.insert(builder);
        self
    }

    /// Insert a builder, returning the one it replaces.
    pub fn insert<T: Any>(&mut self, builder: T) -> Option<T> {
        self.slots
            .insert(TypeId::of::<T>(), Box::new(builder))
            .and_then(|old| old.downcast::<T>().ok())
            .map(|old| *old)
    }

    pub fn get<T: Any>(&self) -> Option<&T> {
        self.slots
            .get(&TypeId::of::<T>())
            .and_then(|b| b.downcast_ref::<T>())
    }

    pub fn get_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.slots
            .get_mut(&TypeId::of::<T>())
            .and_then(|b| b.downcast_mut::<T>())
    }

    pub fn remove<T: Any>(&mut self) -> Option<T> {
        self.slots
            .remove(&TypeId::of::<T>())
            .and_then(|b| b.downcast::<T>().ok())
            .map(|b| *b)
    }

    pub fn contains<T: Any>(&self) -> bool {
        self.slots.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl fmt::Debug for Builders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builders")
            .field("count", &self.slots.len())
            .finish()
    }
}

// ── RenderContext ────────────────────────────────────────────────────────────

pub struct RenderContext<'a> {
    engine: &'a Engine,
    data: &'a DataContext,
    builders: &'a mut Builders,
    path: Vec<String>,
}

impl<'a> RenderContext<'a> {
    pub(crate) fn new(engine: &'a Engine, data: &'a DataContext, builders: &'a mut Builders) -> Self {
        Self {
            engine,
            data,
            builders,
            path: Vec::new(),
        }
    }

    pub fn engine(&self) -> &'a Engine {
        self.engine
    }

    pub fn data(&self) -> &'a DataContext {
        self.data
    }

    pub fn builders(&self) -> &Builders {
        &*self.builders
    }

    pub fn builders_mut(&mut self) -> &mut Builders {
        &mut *self.builders
    }

    pub fn builder<T: Any>(&self) -> Option<&T> {
        self.builders.get::<T>()
    }

    pub fn builder_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.builders.get_mut::<T>()
    }

    /// Like [`builder_mut`](Self::builder_mut), but a missing builder is a
    /// hard error attributed to `tag`.
    pub fn require_builder<T: Any>(&mut self, tag: &str) -> XulResult<&mut T> {
        self.builders.get_mut::<T>().ok_or_else(|| {
            ApplicationError::MissingBuilder {
                tag: tag.to_string(),
                builder: short_type_name::<T>(),
            }
            .into()
        })
    }

    /// Render every child of `node` in document order and aggregate.
    pub fn render_children(&mut self, node: &MarkupNode) -> XulResult<RenderResult> {
        let engine = self.engine;
        engine.render_children(node, self)
    }

    /// Render one node through the registry. `index` is its position among
    /// its siblings, used for the error location.
    pub fn render_node(&mut self, node: &MarkupNode, index: usize) -> XulResult<RenderResult> {
        let engine = self.engine;
        engine.render_node(node, index, self)
    }

    /// The node's attributes with bindings resolved against the data context.
    pub fn parsed_attributes(&self, node: &MarkupNode) -> Attributes {
        attributes::parsed_attributes(node, self.data)
    }

    /// One interpolated attribute, `None` when absent.
    pub fn attribute(&self, node: &MarkupNode, name: &str) -> Option<String> {
        attributes::get_parsed(node, name, self.data)
    }

    /// Location of the node currently being rendered, e.g. `grid[0]/head[0]`.
    pub fn location(&self) -> String {
        self.path.join("/")
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub(crate) fn enter(&mut self, tag: &str, index: usize, limit: usize) -> XulResult<()> {
        if self.path.len() >= limit {
            return Err(ApplicationError::DepthExceeded { limit }.into());
        }
        self.path.push(format!("{tag}[{index}]"));
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        self.path.pop();
    }
}

impl fmt::Debug for RenderContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderContext")
            .field("data", &self.data)
            .field("builders", &self.builders)
            .field("path", &self.path)
            .finish()
    }
}

fn short_type_name<T>() -> &'static str {
    let full = type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
