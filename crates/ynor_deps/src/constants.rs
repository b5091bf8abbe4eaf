//! Resolution defaults for Ynor source trees.
//!
//! Relative imports that do not name an existing file directly are retried
//! with these defaults, in the order exact path, appended extension,
//! directory index.

/// Extension appended when a relative import omits it
pub const DEFAULT_EXTENSION: &str = "js";

/// Index file tried when a relative import names a directory
pub const INDEX_FILE: &str = "index.js";
