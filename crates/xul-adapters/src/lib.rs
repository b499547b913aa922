//! Infrastructure adapters for Xul.
//!
//! This crate implements the ports defined in `xul_core::application::ports`:
//! the built-in controls (`Renderer`s), the XML markup source and the data
//! file loaders. It is where file I/O and parsing live.

pub mod controls;
pub mod data;
pub mod markup;

// Re-export commonly used adapters
pub use controls::{BUILTIN_TAGS, register_builtin, standard_registry};
pub use data::{DataError, DataFormat, load_data, parse_data};
pub use markup::XmlMarkupSource;

use xul_core::application::{Engine, RenderService, UnknownTagPolicy};

/// A render service wired with the XML parser and the built-in controls.
pub fn standard_service(policy: UnknownTagPolicy) -> RenderService {
    let engine = Engine::new(standard_registry()).with_policy(policy);
    RenderService::new(Box::new(XmlMarkupSource::new()), engine)
}
