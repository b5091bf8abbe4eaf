use anyhow::{Context, Result, bail};
use log::{info, warn};
use std::{fs, path::PathBuf};

use crate::{
    config::Config,
    template::{BUNDLE_PATH, render_template},
};
use ynor_deps::resolve;

#[derive(Debug, Clone)]
pub struct BuildSummary {
    /// Imports found by the dependency check (local files and packages)
    pub dependencies: usize,
    pub dependency_errors: usize,
    /// Path of the written HTML shell
    pub output: PathBuf,
}

/// Run the build: verify inputs, check the import graph, render the HTML
/// shell, and write it to the output directory.
///
/// Broken imports are logged but do not fail the build; the bundler surfaces
/// them on its own. Missing entry or template files are fatal.
pub fn run_build(cfg: &Config) -> Result<BuildSummary> {
    let entry = cfg.entry();
    let template = cfg.template();
    let out_dir = cfg.out_dir();

    if !entry.is_file() {
        bail!("Entry file does not exist: {}", entry.display());
    }
    if !template.is_file() {
        bail!("HTML template does not exist: {}", template.display());
    }

    info!("Checking dependencies for: {}", entry.display());
    let report = resolve(&entry)?;
    info!(
        "Dependency check completed: {} imports, {} errors",
        report.imports.len(),
        report.errors.len()
    );
    if !report.valid {
        warn!("Dependency check found {} broken imports", report.errors.len());
    }

    let html = fs::read_to_string(&template)
        .with_context(|| format!("Failed to read {}", template.display()))?;
    let rendered = render_template(&html, BUNDLE_PATH);

    fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;
    let output = out_dir.join("index.html");
    fs::write(&output, rendered)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!("Wrote {}", output.display());

    Ok(BuildSummary {
        dependencies: report.imports.len(),
        dependency_errors: report.errors.len(),
        output,
    })
}
