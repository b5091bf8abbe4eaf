//! Static import-dependency resolution for Ynor projects.
//!
//! This crate provides the shared machinery behind the `check` and `build`
//! commands:
//! - Parsing top-level static import declarations from JS files
//! - Resolving relative specifiers against the importing file (exact path,
//!   default extension, directory index)
//! - Walking the transitive import graph into a [`DependencyReport`]

mod constants;
mod graph;
mod parser;
mod resolver;
mod types;

// Re-export public API
pub use constants::{DEFAULT_EXTENSION, INDEX_FILE};
pub use graph::resolve;
pub use parser::imports_for;
pub use resolver::{is_relative_request, resolve_relative};
pub use types::{DependencyReport, ErrorRecord, Import, Specifier};
