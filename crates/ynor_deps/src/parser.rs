use anyhow::{Context, Result, bail};
use log::{debug, trace};
use oxc_allocator::Allocator;
use oxc_ast::ast::Statement;
use oxc_parser::{Parser as OxcParser, ParserReturn};
use oxc_span::SourceType;
use std::{fs, path::Path};

use crate::types::Specifier;

/// Extract the top-level static import specifiers of `file`, in source order.
///
/// Only declarative `import` statements are visible to static analysis;
/// dynamic `import()` and computed specifiers are not reported. A read
/// failure or a syntax error is an `Err` and the caller decides how to
/// record it.
pub fn imports_for(file: &Path) -> Result<Vec<Specifier>> {
    trace!("Parsing file for imports: {}", file.display());
    let src =
        fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;

    let st = source_type_for(file);
    let allocator = Allocator::default();
    let ParserReturn { program, errors, panicked, .. } =
        OxcParser::new(&allocator, &src, st).parse();

    if panicked || !errors.is_empty() {
        bail!("Failed to parse {}", file.display());
    }

    let mut specs: Vec<Specifier> = Vec::new();
    for stmt in &program.body {
        if let Statement::ImportDeclaration(decl) = stmt {
            // import type { Foo } from './bar' has no runtime edge
            if decl.import_kind.is_type() {
                trace!("Skipping type-only import declaration in {}", file.display());
                continue;
            }
            let req = decl.source.value.to_string();
            trace!("Found static import: '{}' in {}", req, file.display());
            specs.push(Specifier { request: req });
        }
    }

    debug!("Found {} import specifiers in {}", specs.len(), file.display());
    Ok(specs)
}

fn source_type_for(path: &Path) -> SourceType {
    let ext = path.extension().and_then(|e| e.to_str());

    let mut st = SourceType::default().with_jsx(matches!(ext, Some("jsx")));

    // .mjs is always an ES module
    if matches!(ext, Some("mjs")) {
        st = st.with_module(true);
    }

    st
}
