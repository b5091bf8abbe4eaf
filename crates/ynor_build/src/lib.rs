//! Build pipeline for Ynor projects.
//!
//! Validates the import graph of the entry file, renders the HTML shell with
//! the bundle script tag, and writes the output directory. The JavaScript
//! bundling itself is delegated to the external bundler, which performs its
//! own module resolution; the dependency report here is informational.

mod builder;
mod config;
mod template;

// Re-export public API
pub use builder::{BuildSummary, run_build};
pub use config::Config;
pub use template::render_template;
