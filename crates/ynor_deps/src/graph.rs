use anyhow::{Result, anyhow};
use chrono::Utc;
use log::{debug, trace};
use path_clean::clean;
use std::{
    collections::HashSet,
    env,
    path::{Path, PathBuf},
};

use crate::{
    parser::imports_for,
    resolver::{is_relative_request, resolve_relative},
    types::{DependencyReport, ErrorRecord, Import},
};

/// Walk the static import graph from `entry` and report every transitively
/// reachable file together with the imports that could not be resolved.
///
/// Broken edges and unreadable files are recorded in the report rather than
/// aborting the traversal; only an empty entry path is a hard failure.
/// Relative entry paths are resolved against the current directory.
pub fn resolve(entry: &Path) -> Result<DependencyReport> {
    if entry.as_os_str().is_empty() {
        return Err(anyhow!("Entry path is empty"));
    }
    let entry = absolutize(entry)?;
    debug!("Resolving dependency graph from {}", entry.display());

    let mut walk = Walk::default();
    walk.analyze(&entry);

    debug!(
        "Visited {} files, {} imports, {} errors",
        walk.visited.len(),
        walk.imports.len(),
        walk.errors.len()
    );

    let valid = walk.errors.is_empty();
    Ok(DependencyReport {
        entry,
        imports: walk.imports,
        visited: walk.visited,
        errors: walk.errors,
        valid,
        generated_at: Utc::now(),
    })
}

fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(clean(path));
    }
    let cwd = env::current_dir()?;
    Ok(clean(cwd.join(path)))
}

/// Traversal state for a single `resolve` call. Dropped when the report is
/// assembled; nothing is shared across calls.
#[derive(Default)]
struct Walk {
    visited: Vec<PathBuf>,
    seen: HashSet<PathBuf>,
    imports: Vec<Import>,
    seen_imports: HashSet<Import>,
    errors: Vec<ErrorRecord>,
}

impl Walk {
    fn analyze(&mut self, file: &Path) {
        // Mark before descending so a cycle back to this file is a no-op
        if !self.seen.insert(file.to_path_buf()) {
            trace!("Already visited: {}", file.display());
            return;
        }
        self.visited.push(file.to_path_buf());
        trace!("Visiting: {}", file.display());

        let specs = match imports_for(file) {
            Ok(specs) => specs,
            Err(e) => {
                self.errors.push(ErrorRecord {
                    file: file.to_path_buf(),
                    import: None,
                    message: e.to_string(),
                });
                return;
            }
        };

        for spec in specs {
            if !is_relative_request(&spec.request) {
                // External packages are accepted unverified, as leaves
                self.push_import(Import::External(spec.request));
                continue;
            }

            match resolve_relative(file, &spec.request) {
                Some(next) => {
                    // Record the edge, then descend before the next sibling
                    self.push_import(Import::Local(next.clone()));
                    self.analyze(&next);
                }
                None => self.errors.push(ErrorRecord {
                    file: file.to_path_buf(),
                    import: Some(spec.request.clone()),
                    message: format!("Cannot resolve import: {}", spec.request),
                }),
            }
        }
    }

    fn push_import(&mut self, import: Import) {
        if self.seen_imports.insert(import.clone()) {
            self.imports.push(import);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_file(dir: &Path, path: &str, content: &str) -> PathBuf {
        let file_path = dir.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    #[test]
    fn test_acyclic_graph() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        let entry = create_test_file(root, "src/index.js", "import './a'; import './b';");
        let a = create_test_file(root, "src/a.js", "import './c';");
        let b = create_test_file(root, "src/b.js", "// b");
        let c = create_test_file(root, "src/c.js", "// c");

        let report = resolve(&entry).unwrap();
        assert!(report.valid);
        assert_eq!(
            report.imports,
            vec![Import::Local(a), Import::Local(c), Import::Local(b)]
        );
        assert_eq!(report.visited.len(), 4);
    }

    #[test]
    fn test_cycle_terminates() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        let entry = create_test_file(root, "src/a.js", "import './b';");
        let b = create_test_file(root, "src/b.js", "import './a';");

        let report = resolve(&entry).unwrap();
        assert!(report.valid);
        // Both files appear exactly once; the back-edge to the entry counts
        assert_eq!(
            report.imports,
            vec![Import::Local(b), Import::Local(entry.clone())]
        );
        assert_eq!(report.visited, vec![entry, root.join("src/b.js")]);
    }

    #[test]
    fn test_diamond_dedup() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        let entry = create_test_file(root, "src/index.js", "import './a'; import './b';");
        create_test_file(root, "src/a.js", "import './c';");
        create_test_file(root, "src/b.js", "import './c';");
        let c = create_test_file(root, "src/c.js", "// c");

        let report = resolve(&entry).unwrap();
        assert!(report.valid);
        let c_count =
            report.imports.iter().filter(|i| **i == Import::Local(c.clone())).count();
        assert_eq!(c_count, 1);
        assert_eq!(report.imports.len(), 3); // a, c, b
    }

    #[test]
    fn test_broken_import_is_recorded_not_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        let entry = create_test_file(root, "src/a.js", "import './b';\nimport 'lodash';");
        let b = create_test_file(root, "src/b.js", "import './c.js';");

        let report = resolve(&entry).unwrap();
        assert!(!report.valid);
        assert_eq!(
            report.imports,
            vec![Import::Local(b.clone()), Import::External("lodash".to_string())]
        );
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].file, b);
        assert_eq!(report.errors[0].import.as_deref(), Some("./c.js"));
        assert!(report.errors[0].message.to_lowercase().contains("cannot resolve"));
    }

    #[test]
    fn test_unreadable_entry() {
        let temp_dir = TempDir::new().unwrap();
        let entry = temp_dir.path().join("missing.js");

        let report = resolve(&entry).unwrap();
        assert!(!report.valid);
        assert!(report.imports.is_empty());
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].file, entry);
        assert!(report.errors[0].import.is_none());
        assert_eq!(report.visited, vec![entry]);
    }

    #[test]
    fn test_external_imports_are_leaves() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        let entry =
            create_test_file(root, "src/index.js", "import 'lodash';\nimport '@scope/pkg';");

        let report = resolve(&entry).unwrap();
        assert!(report.valid);
        assert_eq!(
            report.imports,
            vec![
                Import::External("lodash".to_string()),
                Import::External("@scope/pkg".to_string())
            ]
        );
        // Only the entry itself was analyzed
        assert_eq!(report.visited.len(), 1);
    }

    #[test]
    fn test_directory_index_resolution() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        let entry = create_test_file(root, "src/index.js", "import './utils';");
        let index = create_test_file(root, "src/utils/index.js", "// utils");

        let report = resolve(&entry).unwrap();
        assert!(report.valid);
        assert_eq!(report.imports, vec![Import::Local(index)]);
    }

    #[test]
    fn test_unparsable_file_prunes_subtree_only() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        let entry = create_test_file(root, "src/index.js", "import './bad'; import './good';");
        create_test_file(root, "src/bad.js", "import { from './nowhere';");
        let good = create_test_file(root, "src/good.js", "// good");

        let report = resolve(&entry).unwrap();
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].import.is_none());
        // The sibling after the broken file is still analyzed
        assert!(report.imports.contains(&Import::Local(good)));
    }

    #[test]
    fn test_idempotent_modulo_timestamp() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        let entry = create_test_file(root, "src/index.js", "import './a'; import './gone';");
        create_test_file(root, "src/a.js", "import 'react';");

        let first = resolve(&entry).unwrap();
        let second = resolve(&entry).unwrap();
        assert_eq!(first.imports, second.imports);
        assert_eq!(first.errors.len(), second.errors.len());
        assert_eq!(first.valid, second.valid);
    }

    #[test]
    fn test_empty_entry_is_fatal() {
        assert!(resolve(Path::new("")).is_err());
    }

    #[test]
    fn test_relative_entry_is_absolutized() {
        let temp_dir = TempDir::new().unwrap();
        let entry = create_test_file(temp_dir.path(), "index.js", "// empty");

        let report = resolve(&entry).unwrap();
        assert!(report.entry.is_absolute());
    }
}
