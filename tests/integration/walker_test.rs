//! Graph walking over packages laid out on disk

use std::fs;
use std::path::Path;
use tempfile::tempdir;
use dts_walker::{all_referenced_files, get_module_info, DiskFileSystem, WalkerError};

fn write_files(root: &Path, files: &[(&str, &str)]) {
    for (name, content) in files {
        let path = root.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
}

fn entries() -> Vec<String> {
    vec!["index.d.ts".to_string()]
}

#[test]
fn test_walks_diamond_once_per_file() {
    let dir = tempdir().unwrap();
    write_files(
        dir.path(),
        &[
            ("index.d.ts", "import { A } from \"./a\";\nimport { B } from \"./b\";\nexport const x: A | B;\n"),
            ("a.d.ts", "import { Shared } from \"./shared\";\nexport type A = Shared;\n"),
            ("b.d.ts", "/// <reference path=\"shared.d.ts\" />\nexport type B = number;\n"),
            ("shared.d.ts", "export interface Shared { id: number }\n"),
        ],
    );

    let fs = DiskFileSystem::new(dir.path());
    let files = all_referenced_files(&entries(), &fs).unwrap();

    let names: Vec<&str> = files.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["a.d.ts", "b.d.ts", "index.d.ts", "shared.d.ts"]);
}

#[test]
fn test_follows_directory_imports_to_index() {
    let dir = tempdir().unwrap();
    write_files(
        dir.path(),
        &[
            ("index.d.ts", "export * from \"./lib\";\n"),
            ("lib/index.d.ts", "export * from \"..\";\nexport declare function helper(): void;\n"),
        ],
    );

    let fs = DiskFileSystem::new(dir.path());
    let files = all_referenced_files(&entries(), &fs).unwrap();

    assert!(files.contains_key("index.d.ts"));
    assert!(files.contains_key("lib/index.d.ts"));
    assert_eq!(files.len(), 2);
}

#[test]
fn test_reference_leaving_package_is_rejected() {
    let dir = tempdir().unwrap();
    write_files(dir.path(), &[("index.d.ts", "import { Other } from \"../other\";\nexport type T = Other;\n")]);

    let fs = DiskFileSystem::new(dir.path());
    let err = all_referenced_files(&entries(), &fs).unwrap_err();

    assert!(matches!(err, WalkerError::EscapingReference { .. }));
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn test_unreadable_reference_is_environment_error() {
    let dir = tempdir().unwrap();
    write_files(dir.path(), &[("index.d.ts", "/// <reference path=\"missing.d.ts\" />\n")]);

    let fs = DiskFileSystem::new(dir.path());
    let err = all_referenced_files(&entries(), &fs).unwrap_err();

    match &err {
        WalkerError::Io { path, .. } => assert!(path.ends_with("missing.d.ts")),
        other => panic!("expected io error, got {other:?}"),
    }
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_byte_order_mark_is_rejected() {
    let dir = tempdir().unwrap();
    write_files(dir.path(), &[("index.d.ts", "\u{feff}export const x: number;\n")]);

    let fs = DiskFileSystem::new(dir.path());
    let err = get_module_info("pkg", &entries(), &fs).unwrap_err();

    assert!(matches!(err, WalkerError::ByteOrderMark { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_syntax_error_is_reported_with_file() {
    let dir = tempdir().unwrap();
    write_files(dir.path(), &[("index.d.ts", "export const = ;\n")]);

    let fs = DiskFileSystem::new(dir.path());
    let err = get_module_info("pkg", &entries(), &fs).unwrap_err();

    match err {
        WalkerError::Parse { path, messages } => {
            assert!(path.ends_with("index.d.ts"));
            assert!(!messages.is_empty());
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}
