//! Application layer for Xul.
//!
//! This layer contains:
//! - **Ports**: the `Renderer` plugin trait and the `MarkupSource` port
//! - **Registry / Context / Engine**: per-tag dispatch and the tree walk
//! - **Services**: use case orchestration (`RenderService`)
//! - **Errors**: application-specific error types
//!
//! Controls themselves live in `xul-adapters`; this layer only knows how to
//! dispatch to them.

pub mod context;
pub mod engine;
pub mod error;
pub mod ports;
pub mod registry;
pub mod services;

pub use context::{Builders, RenderContext};
pub use engine::{Engine, MAX_DEPTH, UnknownTagPolicy};
pub use error::ApplicationError;
pub use ports::{FnRenderer, MarkupSource, Renderer};
pub use registry::RendererRegistry;
pub use services::{MarkupStats, RenderOutput, RenderService};
