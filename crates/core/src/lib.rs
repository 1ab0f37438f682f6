//! Builds the typed binding hierarchy out of a raw API description: nesting,
//! managed names, interface invokers and resolved base types.

pub mod builder;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod index;
pub mod logging;
pub mod model;
pub mod naming;

pub use builder::HierarchyBuilder;
pub use config::{BuilderConfig, DuplicatePolicy};
pub use error::{BindscopeError, Result};
pub use model::{Element, ElementId, ElementKind, Hierarchy};
