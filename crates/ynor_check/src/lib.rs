//! Dependency checking for Ynor projects.
//!
//! This crate wires the import-graph resolver into the `check` CLI command:
//! it picks the entry file, runs the traversal, and prints either a colored
//! summary or the full report as JSON.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```no_run
//! use ynor_check::{Config, run_check};
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config { entry: Some(std::path::PathBuf::from("src/index.js")), json: false };
//!
//! let report = run_check(&cfg)?;
//!
//! let mut stdout = BufWriter::new(std::io::stdout());
//! if report.valid {
//!     ynor_check::print_valid_message(&mut stdout, &report)?;
//! } else {
//!     ynor_check::print_report(&mut stdout, &report)?;
//! }
//! stdout.flush()?;
//! # Ok(())
//! # }
//! ```

mod checker;
mod config;
mod reporter;

// Re-export public API
pub use checker::run_check;
pub use config::Config;
pub use reporter::{print_json, print_report, print_valid_message};
