//! Application ports (traits) for external collaborators.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: called by the application, implemented by
//!   infrastructure
//!   - `MarkupSource`: turns markup text into a [`MarkupNode`] tree
//!
//! - **Plugin Port**: called by the engine, implemented by controls
//!   - `Renderer`: renders one markup element
//!
//! [`MarkupNode`]: crate::domain::MarkupNode

pub mod output;
pub mod renderer;

pub use output::MarkupSource;
pub use renderer::{FnRenderer, Renderer};
