//! Tag name → renderer mapping.

use std::{collections::HashMap, fmt};

use tracing::debug;

use crate::{
    application::{
        context::RenderContext,
        ports::{FnRenderer, Renderer},
    },
    domain::{MarkupNode, RenderResult},
    error::XulResult,
};

/// Explicit, constructed registry of renderers.
///
/// Holds at most one renderer per tag. Registering a tag again replaces the
/// earlier renderer (last write wins), which lets an application override a
/// built-in control without rebuilding the registry.
#[derive(Default)]
pub struct RendererRegistry {
    renderers: HashMap<String, Box<dyn Renderer>>,
}

impl RendererRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, tag: impl Into<String>, renderer: impl Renderer + 'static) -> &mut Self {
        let tag = tag.into();
        if self.renderers.insert(tag.clone(), Box::new(renderer)).is_some() {
            debug!(tag = %tag, "Renderer replaced");
        }
        self
    }

    /// Register a plain function or closure.
    pub fn register_fn<F>(&mut self, tag: impl Into<String>, render: F) -> &mut Self
    where
        F: Fn(&MarkupNode, &mut RenderContext<'_>) -> XulResult<RenderResult>
            + Send
            + Sync
            + 'static,
    {
        self.register(tag, FnRenderer(render))
    }

    pub fn lookup(&self, tag: &str) -> Option<&dyn Renderer> {
        self.renderers.get(tag).map(|r| r.as_ref())
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.renderers.contains_key(tag)
    }

    pub fn unregister(&mut self, tag: &str) -> bool {
        self.renderers.remove(tag).is_some()
    }

    /// Registered tags, sorted.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.renderers.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }
}

impl fmt::Debug for RendererRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RendererRegistry")
            .field("tags", &self.tags())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal(text: &'static str) -> impl Fn(&MarkupNode, &mut RenderContext<'_>) -> XulResult<RenderResult> + Send + Sync + 'static {
        move |_, _| Ok(RenderResult::fragment(text))
    }

    #[test]
    fn lookup_unknown_tag_is_none() {
        let registry = RendererRegistry::new();
        assert!(registry.lookup("block").is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn last_registration_wins() {
        let mut registry = RendererRegistry::new();
        registry
            .register_fn("label", literal("first"))
            .register_fn("label", literal("second"));
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("label"));
    }

    #[test]
    fn tags_are_sorted() {
        let mut registry = RendererRegistry::new();
        registry
            .register_fn("head", literal(""))
            .register_fn("block", literal(""))
            .register_fn("grid", literal(""));
        assert_eq!(registry.tags(), vec!["block", "grid", "head"]);
        assert!(registry.unregister("grid"));
        assert!(!registry.unregister("grid"));
    }
}
