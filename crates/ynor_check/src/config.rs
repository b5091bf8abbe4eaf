use clap::Parser;
use std::path::PathBuf;

/// Default entry file of a Ynor project, relative to the working directory
pub(crate) const DEFAULT_ENTRY: &str = "src/browsers/layouts/index.js";

#[derive(Debug, Clone, Parser)]
#[command(name = "check")]
#[command(about = "Validate the import graph of a Ynor project")]
pub struct Config {
    /// Entry file to analyze (defaults to the project layout entry)
    pub entry: Option<PathBuf>,

    /// Emit the full report as JSON instead of human-readable output
    #[arg(long)]
    pub json: bool,
}

impl Config {
    /// The entry file to check, falling back to the conventional layout entry
    pub fn entry(&self) -> PathBuf {
        self.entry.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_ENTRY))
    }
}
