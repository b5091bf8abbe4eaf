use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// One top-level static import declaration, in source order.
#[derive(Debug, Clone)]
pub struct Specifier {
    pub request: String,
}

/// A resolved dependency edge: either a local file on disk or an external
/// package reference accepted as-is without verification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Import {
    Local(PathBuf),
    External(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorRecord {
    pub file: PathBuf,
    /// The unresolved specifier, absent for file-level read/parse failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import: Option<String>,
    pub message: String,
}

/// Result of one [`resolve`](crate::resolve) call. Mutated only by the
/// traversal that builds it, read-only once returned.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyReport {
    /// Absolute path of the starting file
    pub entry: PathBuf,
    /// Resolved local paths and external references, in first-reach order
    pub imports: Vec<Import>,
    /// Every file analyzed, in first-visit order
    #[serde(rename = "checkedFiles")]
    pub visited: Vec<PathBuf>,
    pub errors: Vec<ErrorRecord>,
    /// `errors.is_empty()` at assembly time
    pub valid: bool,
    pub generated_at: DateTime<Utc>,
}
