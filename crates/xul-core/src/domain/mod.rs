// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Xul.
//!
//! Pure data and pure functions: the markup tree, the data context and its
//! attribute resolver, render results, and the grid builder. No renderer
//! dispatch and no I/O happens here.
//!
//! - **No I/O**: markup arrives already parsed, data already loaded
//! - **Fail soft on lookups**: attribute and binding lookups return defaults
//!   or `None`, never errors
//! - **Hard errors for structure**: invalid markup and grid misuse are
//!   [`DomainError`]s

pub mod attributes;
pub mod data;
pub mod error;
pub mod grid;
pub mod markup;
pub mod result;

pub use data::DataContext;
pub use error::{DomainError, ErrorCategory};
pub use grid::{Cell, Column, Grid, Row};
pub use markup::{Attributes, MarkupNode, TEXT_TAG};
pub use result::{ColumnSpec, RenderResult};
