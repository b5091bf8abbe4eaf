use anyhow::Result;
use log::{debug, info};
use ynor_deps::{DependencyReport, resolve};

use crate::config::Config;

/// Run the dependency check for the configured entry file.
///
/// Broken imports end up in the report's `errors`; only a malformed entry
/// path is an `Err`.
pub fn run_check(cfg: &Config) -> Result<DependencyReport> {
    let entry = cfg.entry();
    info!("Checking dependencies for: {}", entry.display());

    let report = resolve(&entry)?;
    debug!(
        "Check complete: {} files, {} imports, {} errors",
        report.visited.len(),
        report.imports.len(),
        report.errors.len()
    );
    Ok(report)
}
