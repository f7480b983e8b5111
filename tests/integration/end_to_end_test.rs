//! Whole-package analysis through the public API

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;
use dts_walker::{Analyzer, Settings, WalkerError};

fn write_files(root: &Path, files: &[(&str, &str)]) {
    for (name, content) in files {
        let path = root.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
}

/// A small package mixing module files, a script file and a test file
fn create_lodash_package(root: &Path) {
    write_files(
        root,
        &[
            (
                "index.d.ts",
                r#"/// <reference path="globals.d.ts" />
/// <reference types="node" />
import { Readable } from "stream";
import * as util from "./lib/util";

export declare function chunk<T>(items: T[], size: number): T[][];
export as namespace _;
"#,
            ),
            (
                "globals.d.ts",
                r#"declare const VERSION: string;

declare module "lodash-extra" {
    export const extra: number;
}

declare namespace LodashGlobal {
    const inner: number;
}

declare namespace LodashTypes {
    interface Options {}
}

interface OnlyType {}
"#,
            ),
            ("lib/util.d.ts", "export declare function helper(): void;\n"),
            (
                "lodash-tests.ts",
                r#"import * as _ from "lodash";
import { EventEmitter } from "events";
import { Readable } from "stream";

_.chunk([1, 2, 3], 2);
"#,
            ),
        ],
    );
}

fn settings_for(root: &Path, name: &str) -> Settings {
    Settings {
        package_path: PathBuf::from(root),
        package_name: Some(name.to_string()),
        ..Default::default()
    }
}

#[test]
fn test_package_summary() {
    let dir = tempdir().unwrap();
    create_lodash_package(dir.path());

    let report = Analyzer::new(settings_for(dir.path(), "lodash")).analyze().unwrap();
    let info = &report.module_info;

    assert_eq!(report.package_name, "lodash");
    assert_eq!(info.decl_files, vec!["globals.d.ts", "index.d.ts", "lib/util.d.ts"]);
    assert_eq!(
        info.dependencies.iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["node", "stream"]
    );
    assert_eq!(info.declared_modules, vec!["lodash-extra", "lodash", "lodash/lib/util"]);
    assert_eq!(info.globals, vec!["LodashGlobal", "VERSION", "_"]);

    // "stream" is already a declaration dependency and "lodash" is the package itself
    assert_eq!(
        report.test_dependencies.iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["events"]
    );
}

#[test]
fn test_package_name_defaults_to_directory() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("left-pad");
    write_files(&root, &[("index.d.ts", "export declare function leftPad(s: string): string;\n")]);

    let settings = Settings {
        package_path: root,
        ..Default::default()
    };
    let report = Analyzer::new(settings).analyze().unwrap();

    assert_eq!(report.package_name, "left-pad");
    assert_eq!(report.module_info.declared_modules, vec!["left-pad"]);
    assert!(report.test_dependencies.is_empty());
}

#[test]
fn test_tsconfig_files_select_entries_and_tests() {
    let dir = tempdir().unwrap();
    write_files(
        dir.path(),
        &[
            ("main.d.ts", "declare function greet(name: string): void;\n"),
            ("index.d.ts", "this file is not listed and is never parsed"),
            ("check.ts", "import * as assert from \"assert\";\n"),
            (
                "tsconfig.json",
                r#"{ "compilerOptions": { "strict": true }, "files": ["main.d.ts", "check.ts"] }"#,
            ),
        ],
    );

    let report = Analyzer::new(settings_for(dir.path(), "greet")).analyze().unwrap();

    assert_eq!(report.module_info.decl_files, vec!["main.d.ts"]);
    assert_eq!(report.module_info.globals, vec!["greet"]);
    assert!(report.module_info.declared_modules.is_empty());
    assert_eq!(
        report.test_dependencies.iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["assert"]
    );
}

#[test]
fn test_redundant_test_reference_fails() {
    let dir = tempdir().unwrap();
    write_files(
        dir.path(),
        &[
            ("index.d.ts", "/// <reference types=\"node\" />\nexport declare const x: number;\n"),
            ("pkg-tests.ts", "/// <reference types=\"node\" />\nimport { x } from \"pkg\";\n"),
        ],
    );

    let err = Analyzer::new(settings_for(dir.path(), "pkg")).analyze().unwrap_err();

    match &err {
        WalkerError::RedundantTestReference { file, dependency } => {
            assert_eq!(file, "pkg/pkg-tests.ts");
            assert_eq!(dependency, "node");
        }
        other => panic!("expected redundant reference, got {other:?}"),
    }
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn test_path_reference_in_test_fails() {
    let dir = tempdir().unwrap();
    write_files(
        dir.path(),
        &[
            ("index.d.ts", "export declare const x: number;\n"),
            ("pkg-tests.ts", "/// <reference path=\"index.d.ts\" />\n"),
        ],
    );

    let err = Analyzer::new(settings_for(dir.path(), "pkg")).analyze().unwrap_err();
    assert!(matches!(err, WalkerError::TestPathReference { .. }));
}

#[test]
fn test_missing_package_directory() {
    let dir = tempdir().unwrap();
    let settings = settings_for(&dir.path().join("absent"), "absent");

    let err = Analyzer::new(settings).analyze().unwrap_err();
    assert!(matches!(err, WalkerError::InvalidPath { .. }));
    assert_eq!(err.exit_code(), 1);
}
