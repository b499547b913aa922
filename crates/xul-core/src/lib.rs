//! Xul Core - declarative UI rendering engine
//!
//! This crate provides the domain and application layers of Xul: a small
//! interpreter that walks a markup tree, dispatches each element to a
//! per-tag renderer, resolves data-bound attributes against a data context,
//! and builds a structured output model (a [`Grid`](domain::Grid)) as a side
//! effect of the walk.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │              xul-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    RenderService / Engine / Registry    │
//! │         (application layer)             │
//! └──────────────────┬──────────────────────┘
//!                    │ dispatches to
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │  Ports: Renderer, MarkupSource (traits) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     xul-adapters (controls, parser)     │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (MarkupNode, DataContext, Grid, ...)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use xul_core::prelude::*;
//!
//! let mut registry = RendererRegistry::new();
//! registry.register_fn("upper", |node, ctx| {
//!     Ok(RenderResult::fragment(ctx.render_children(node)?.text().to_uppercase()))
//! });
//! let engine = Engine::new(registry);
//!
//! let root = MarkupNode::new("upper")
//!     .unwrap()
//!     .with_child(MarkupNode::text("hello"));
//! let result = engine
//!     .render(&root, &DataContext::new(), &mut Builders::new())
//!     .unwrap();
//! assert_eq!(result.text(), "HELLO");
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, Builders, Engine, MarkupSource, RenderContext, RenderOutput,
        RenderService, Renderer, RendererRegistry, UnknownTagPolicy,
    };
    pub use crate::domain::{
        Attributes, ColumnSpec, DataContext, DomainError, Grid, MarkupNode, RenderResult,
        attributes,
    };
    pub use crate::error::{XulError, XulResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
