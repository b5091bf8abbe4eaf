use clap::Parser;
use std::path::PathBuf;

pub(crate) const DEFAULT_ENTRY: &str = "src/browsers/layouts/index.js";
pub(crate) const DEFAULT_TEMPLATE: &str = "src/browsers/layouts/pages/home.html";
pub(crate) const DEFAULT_OUT_DIR: &str = "dist";

#[derive(Debug, Clone, Parser)]
#[command(name = "build")]
#[command(about = "Build the HTML shell for a Ynor project")]
pub struct Config {
    /// Entry file for the dependency check and the bundler
    #[arg(long)]
    pub entry: Option<PathBuf>,

    /// HTML template containing the script marker
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Output directory
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

impl Config {
    pub fn entry(&self) -> PathBuf {
        self.entry.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_ENTRY))
    }

    pub fn template(&self) -> PathBuf {
        self.template.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE))
    }

    pub fn out_dir(&self) -> PathBuf {
        self.out_dir.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR))
    }
}
