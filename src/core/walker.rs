//! Declaration graph walking
//!
//! Starting from the entry files, every file reachable through
//! `/// <reference path>` directives and relative imports is read and parsed.
//! Outgoing references of a file are followed in parallel with rayon. Two
//! concurrent sets make the walk idempotent: one keyed on the reference text,
//! so a reference is followed at most once, and one keyed on the resolved file
//! name, so a file reached through different spellings is parsed at most once.

use crate::core::file_system::{read_file_and_throw_on_bom, FileSystem};
use crate::core::resolver::resolve_reference;
use crate::error::{Result, WalkerError};
use crate::models::{Reference, SourceFile};
use crate::parsers::{imports, is_relative, ASTParser};
use crate::utils::paths::{dirname, escapes_root, has_windows_slashes, join_paths, normalize, normalize_slashes};
use dashmap::{DashMap, DashSet};
use rayon::prelude::*;
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Parse every file reachable from `entry_files`, keyed by file name
pub fn all_referenced_files<F>(entry_files: &[String], fs: &F) -> Result<BTreeMap<String, SourceFile>>
where
    F: FileSystem + ?Sized,
{
    GraphWalker::new(fs).walk(entry_files)
}

/// Concurrent walker over the declaration graph of one package
pub struct GraphWalker<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
    parser: ASTParser,
    seen_references: DashSet<String>,
    parsed_files: DashSet<String>,
    files: DashMap<String, SourceFile>,
}

impl<'a, F: FileSystem + ?Sized> GraphWalker<'a, F> {
    pub fn new(fs: &'a F) -> Self {
        Self {
            fs,
            parser: ASTParser::new(),
            seen_references: DashSet::new(),
            parsed_files: DashSet::new(),
            files: DashMap::new(),
        }
    }

    /// Walk from `entry_files` and hand back everything that was parsed.
    ///
    /// The first failing file aborts the walk; no partial result is returned.
    pub fn walk(self, entry_files: &[String]) -> Result<BTreeMap<String, SourceFile>> {
        debug!(entries = entry_files.len(), "walking declaration graph");

        entry_files
            .par_iter()
            .try_for_each(|entry| self.visit(Reference::exact(entry.as_str())))?;

        let files: BTreeMap<String, SourceFile> = self.files.into_iter().collect();
        debug!(files = files.len(), "declaration graph complete");
        Ok(files)
    }

    fn visit(&self, reference: Reference) -> Result<()> {
        if !self.seen_references.insert(reference.text.clone()) {
            return Ok(());
        }

        let file_name = resolve_reference(&reference, self.fs);
        if !self.parsed_files.insert(file_name.clone()) {
            trace!(reference = %reference.text, file = %file_name, "already parsed");
            return Ok(());
        }

        let text = read_file_and_throw_on_bom(&file_name, self.fs)?;
        let source = self.parser.parse(&file_name, &text)?;
        let references = referenced_files(&source, dirname(&file_name))?;
        trace!(file = %file_name, references = references.len(), "parsed file");
        self.files.insert(file_name, source);

        references
            .into_par_iter()
            .try_for_each(|reference| self.visit(reference))
    }
}

/// Outgoing references of `source`, normalised relative to `sub_directory`.
///
/// Path directives produce exact references and relative imports produce
/// module references. Non-relative imports name other packages and are left
/// out.
pub fn referenced_files(source: &SourceFile, sub_directory: &str) -> Result<Vec<Reference>> {
    let exact = source.referenced_files.iter().map(|path| (path.as_str(), true));
    let relative = imports(&source.statements)
        .filter(|specifier| is_relative(specifier))
        .map(|specifier| (specifier, false));

    exact
        .chain(relative)
        .map(|(text, exact)| {
            assert_no_windows_slashes(&source.file_name, text)?;
            let full = normalize_slashes(&normalize(&join_paths(sub_directory, text)));
            if escapes_root(&full) {
                return Err(WalkerError::EscapingReference {
                    file: source.file_name.clone(),
                    reference: text.to_string(),
                });
            }
            Ok(Reference { text: full, exact })
        })
        .collect()
}

/// Reject `reference` if it uses a backslash separator
pub fn assert_no_windows_slashes<'r>(file_name: &str, reference: &'r str) -> Result<&'r str> {
    if has_windows_slashes(reference) {
        return Err(WalkerError::BackslashInPath {
            file: file_name.to_string(),
            reference: reference.to_string(),
        });
    }
    Ok(reference)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::file_system::MemoryFileSystem;

    fn entries(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_single_file() {
        let fs = MemoryFileSystem::new().with_file("index.d.ts", "export function f(): void;\n");
        let files = all_referenced_files(&entries(&["index.d.ts"]), &fs).unwrap();
        assert_eq!(files.keys().collect::<Vec<_>>(), vec!["index.d.ts"]);
    }

    #[test]
    fn test_diamond_reads_shared_file_once() {
        let fs = MemoryFileSystem::new()
            .with_file("index.d.ts", "import \"./a\";\nimport \"./b\";\n")
            .with_file("a.d.ts", "export * from \"./lib/c\";\n")
            .with_file("b.d.ts", "/// <reference path=\"lib/c.d.ts\" />\nexport * from \"./lib/c\";\n")
            .with_file("lib/c.d.ts", "export const c: number;\n");

        let files = all_referenced_files(&entries(&["index.d.ts"]), &fs).unwrap();

        assert_eq!(
            files.keys().collect::<Vec<_>>(),
            vec!["a.d.ts", "b.d.ts", "index.d.ts", "lib/c.d.ts"]
        );
        for name in ["index.d.ts", "a.d.ts", "b.d.ts", "lib/c.d.ts"] {
            assert_eq!(fs.read_count(name), 1, "{} read more than once", name);
        }
    }

    #[test]
    fn test_cycle_terminates() {
        let fs = MemoryFileSystem::new()
            .with_file("index.d.ts", "import \"./lib/a\";\n")
            .with_file("lib/a.d.ts", "import \"./b\";\n")
            .with_file("lib/b.d.ts", "import \"./a\";\nimport \"..\";\n");

        let files = all_referenced_files(&entries(&["index.d.ts"]), &fs).unwrap();

        assert_eq!(files.len(), 3);
        assert_eq!(fs.total_reads(), 3);
    }

    #[test]
    fn test_directory_import_resolves_to_index() {
        let fs = MemoryFileSystem::new()
            .with_file("index.d.ts", "import \"./lib\";\n")
            .with_file("lib/index.d.ts", "import \"./util/\";\n")
            .with_file("lib/util/index.d.ts", "export {};\n");

        let files = all_referenced_files(&entries(&["index.d.ts"]), &fs).unwrap();

        assert!(files.contains_key("lib/index.d.ts"));
        assert!(files.contains_key("lib/util/index.d.ts"));
    }

    #[test]
    fn test_non_relative_imports_are_not_followed() {
        let fs = MemoryFileSystem::new().with_file("index.d.ts", "import * as React from \"react\";\n");
        let files = all_referenced_files(&entries(&["index.d.ts"]), &fs).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(fs.total_reads(), 1);
    }

    #[test]
    fn test_parent_reference_is_rejected() {
        let fs = MemoryFileSystem::new()
            .with_file("index.d.ts", "import \"./lib/a\";\n")
            .with_file("lib/a.d.ts", "import \"../../other\";\n");

        match all_referenced_files(&entries(&["index.d.ts"]), &fs) {
            Err(WalkerError::EscapingReference { file, reference }) => {
                assert_eq!(file, "lib/a.d.ts");
                assert_eq!(reference, "../../other");
            }
            other => panic!("expected escaping reference error, got {:?}", other),
        }
    }

    #[test]
    fn test_parent_reference_inside_package_is_allowed() {
        let fs = MemoryFileSystem::new()
            .with_file("index.d.ts", "import \"./lib/a\";\n")
            .with_file("lib/a.d.ts", "import \"../b\";\n")
            .with_file("b.d.ts", "export {};\n");

        let files = all_referenced_files(&entries(&["index.d.ts"]), &fs).unwrap();
        assert!(files.contains_key("b.d.ts"));
    }

    #[test]
    fn test_backslash_reference_is_rejected() {
        let fs = MemoryFileSystem::new().with_file("index.d.ts", r#"import "./lib\\a";"#);

        match all_referenced_files(&entries(&["index.d.ts"]), &fs) {
            Err(WalkerError::BackslashInPath { file, reference }) => {
                assert_eq!(file, "index.d.ts");
                assert_eq!(reference, "./lib\\a");
            }
            other => panic!("expected backslash error, got {:?}", other),
        }
    }

    #[test]
    fn test_path_directive_leaving_package_is_rejected() {
        let fs = MemoryFileSystem::new().with_file("index.d.ts", "/// <reference path=\"../x.d.ts\" />\nexport {};\n");

        match all_referenced_files(&entries(&["index.d.ts"]), &fs) {
            Err(WalkerError::EscapingReference { file, reference }) => {
                assert_eq!(file, "index.d.ts");
                assert_eq!(reference, "../x.d.ts");
            }
            other => panic!("expected escaping reference error, got {:?}", other),
        }
        assert_eq!(fs.total_reads(), 1);
    }

    #[test]
    fn test_backslash_in_path_directive_is_rejected() {
        let fs = MemoryFileSystem::new()
            .with_file("index.d.ts", r#"/// <reference path="lib\a.d.ts" />"#)
            .with_file("lib/a.d.ts", "declare const a: number;\n");

        match all_referenced_files(&entries(&["index.d.ts"]), &fs) {
            Err(WalkerError::BackslashInPath { file, reference }) => {
                assert_eq!(file, "index.d.ts");
                assert_eq!(reference, "lib\\a.d.ts");
            }
            other => panic!("expected backslash error, got {:?}", other),
        }
        assert_eq!(fs.read_count("lib/a.d.ts"), 0);
    }

    #[test]
    fn test_missing_file_fails_the_walk() {
        let fs = MemoryFileSystem::new().with_file("index.d.ts", "import \"./missing\";\n");
        let err = all_referenced_files(&entries(&["index.d.ts"]), &fs).unwrap_err();
        match err {
            WalkerError::Io { path, .. } => assert_eq!(path.to_string_lossy(), "missing/index.d.ts"),
            other => panic!("expected IO error, got {:?}", other),
        }
    }

    #[test]
    fn test_bom_in_referenced_file_fails_the_walk() {
        let fs = MemoryFileSystem::new()
            .with_file("index.d.ts", "import \"./a\";\n")
            .with_file("a.d.ts", "\u{feff}export {};\n");
        assert!(matches!(
            all_referenced_files(&entries(&["index.d.ts"]), &fs),
            Err(WalkerError::ByteOrderMark { .. })
        ));
    }

    #[test]
    fn test_referenced_files_normalises_against_directory() {
        let source = ASTParser::new()
            .parse(
                "lib/x.d.ts",
                "/// <reference path=\"./y.d.ts\" />\nimport \"../z\";\nimport \"pkg\";\n",
            )
            .unwrap();

        let references = referenced_files(&source, "lib").unwrap();

        assert_eq!(references, vec![Reference::exact("lib/y.d.ts"), Reference::inexact("z")]);
    }
}
