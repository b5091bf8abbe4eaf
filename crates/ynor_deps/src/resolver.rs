use log::trace;
use path_clean::clean;
use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_EXTENSION, INDEX_FILE};

/// Whether `request` names a path relative to the importing file. Anything
/// else is treated as an external package reference.
pub fn is_relative_request(request: &str) -> bool {
    request.starts_with("./") || request.starts_with("../")
}

/// Resolve a relative import against the directory containing `from_file`.
///
/// Candidates are tried in fixed precedence: the exact path, the path with
/// the default extension appended, then the directory index. The first
/// candidate that is a regular file wins even if a later one also exists.
pub fn resolve_relative(from_file: &Path, request: &str) -> Option<PathBuf> {
    let base = from_file.parent()?;
    let target = clean(base.join(request));
    trace!("Resolving '{}' from {} as {}", request, from_file.display(), target.display());

    if target.is_file() {
        return Some(target);
    }

    let with_ext = PathBuf::from(format!("{}.{}", target.display(), DEFAULT_EXTENSION));
    if with_ext.is_file() {
        return Some(with_ext);
    }

    let index = target.join(INDEX_FILE);
    if index.is_file() {
        return Some(index);
    }

    trace!("No candidate exists for '{}' from {}", request, from_file.display());
    None
}
