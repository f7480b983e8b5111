//! Package analysis pipeline
//!
//! Finds the entry and test files of a declaration package on disk, then runs
//! the graph walk, the classifier and the test-dependency audit over them.

use crate::core::classifier::get_module_info;
use crate::core::file_system::DiskFileSystem;
use crate::core::test_deps::get_test_dependencies;
use crate::error::{Result, ResultExt, WalkerError};
use crate::models::{config::Settings, PackageReport};
use crate::utils::paths::{normalize, normalize_slashes};
use glob::Pattern;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

const TSCONFIG: &str = "tsconfig.json";
const DEFAULT_ENTRY: &str = "index.d.ts";

/// Entry and test files of a package, relative to its directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageFiles {
    pub entry_files: Vec<String>,
    pub test_files: Vec<String>,
}

/// Analyzer for a single declaration package on disk
pub struct Analyzer {
    settings: Settings,
}

impl Analyzer {
    /// Create a new analyzer with the given settings
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Analyze the configured package directory
    pub fn analyze(&self) -> Result<PackageReport> {
        let root = &self.settings.package_path;
        if !root.is_dir() {
            return Err(WalkerError::InvalidPath { path: root.clone() });
        }

        let package_name = self.settings.resolved_package_name();
        let files = self.discover()?;
        info!(
            package = %package_name,
            entries = files.entry_files.len(),
            tests = files.test_files.len(),
            "analyzing package"
        );

        let fs = DiskFileSystem::new(root);
        let module_info = get_module_info(&package_name, &files.entry_files, &fs)?;
        let test_dependencies =
            get_test_dependencies(&package_name, &files.test_files, &module_info.dependencies, &fs)?;

        Ok(PackageReport {
            package_name,
            module_info,
            test_dependencies,
        })
    }

    /// Work out entry and test files, preferring explicit settings over discovery
    pub fn discover(&self) -> Result<PackageFiles> {
        let root = &self.settings.package_path;
        let from_tsconfig = read_tsconfig_files(root)?;

        let entry_files = if !self.settings.entry_files.is_empty() {
            clean_all(&self.settings.entry_files)
        } else if let Some(files) = &from_tsconfig {
            files.entry_files.clone()
        } else {
            vec![DEFAULT_ENTRY.to_string()]
        };

        let test_files = if !self.settings.test_files.is_empty() {
            clean_all(&self.settings.test_files)
        } else if let Some(files) = from_tsconfig {
            files.test_files
        } else {
            find_test_files(root, &self.settings.test_patterns)?
        };

        debug!(?entry_files, ?test_files, "discovered package files");
        Ok(PackageFiles { entry_files, test_files })
    }
}

/// Split the `files` list of `tsconfig.json` into declarations and tests.
///
/// Returns `None` when there is no tsconfig or it has no `files` list.
pub fn read_tsconfig_files(root: &Path) -> Result<Option<PackageFiles>> {
    let path = root.join(TSCONFIG);
    if !path.is_file() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path).with_path(&path)?;
    let config: Value = serde_json::from_str(&content).map_err(|err| WalkerError::TsConfig {
        path: path.clone(),
        message: err.to_string(),
    })?;

    let Some(files) = config.get("files") else {
        return Ok(None);
    };
    let files = files.as_array().ok_or_else(|| WalkerError::TsConfig {
        path: path.clone(),
        message: "\"files\" must be an array".to_string(),
    })?;

    let mut result = PackageFiles::default();
    for file in files {
        let name = file.as_str().ok_or_else(|| WalkerError::TsConfig {
            path: path.clone(),
            message: format!("expected a file name string, found {}", file),
        })?;
        let name = clean(name);
        if name.ends_with(".d.ts") {
            result.entry_files.push(name);
        } else {
            result.test_files.push(name);
        }
    }
    result.test_files.sort();
    Ok(Some(result))
}

/// Every file under `root` whose name matches one of `patterns`, sorted
pub fn find_test_files(root: &Path, patterns: &[String]) -> Result<Vec<String>> {
    let patterns = compile_patterns(patterns)?;
    let mut found = Vec::new();

    for entry in WalkDir::new(root).into_iter().filter_entry(|entry| !is_skipped_dir(entry)) {
        let entry = entry.map_err(|err| {
            let path = err.path().map(Path::to_path_buf).unwrap_or_else(|| root.to_path_buf());
            WalkerError::io_error(path, err.into())
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if patterns.iter().any(|pattern| pattern.matches(&file_name)) {
            found.push(relative_name(root, entry.path()));
        }
    }

    found.sort();
    Ok(found)
}

pub fn compile_patterns(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|pattern| {
            Pattern::new(pattern)
                .map_err(|err| WalkerError::config_error(format!("Invalid test pattern '{}': {}", pattern, err)))
        })
        .collect()
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map(|name| name == "node_modules" || name.starts_with('.'))
            .unwrap_or(false)
}

fn relative_name(root: &Path, path: &Path) -> String {
    let relative: PathBuf = path.strip_prefix(root).map(Path::to_path_buf).unwrap_or_else(|_| path.to_path_buf());
    clean(&relative.to_string_lossy())
}

fn clean(name: &str) -> String {
    normalize(&normalize_slashes(name))
}

fn clean_all(names: &[String]) -> Vec<String> {
    names.iter().map(|name| clean(name)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn settings(dir: &TempDir) -> Settings {
        Settings {
            package_path: dir.path().to_path_buf(),
            package_name: Some("foo".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_discovers_from_tsconfig() {
        let dir = TempDir::new().unwrap();
        write(&dir, "tsconfig.json", r#"{ "compilerOptions": {}, "files": ["index.d.ts", "./foo-tests.ts", "lib/extra.d.ts"] }"#);

        let files = Analyzer::new(settings(&dir)).discover().unwrap();

        assert_eq!(files.entry_files, vec!["index.d.ts", "lib/extra.d.ts"]);
        assert_eq!(files.test_files, vec!["foo-tests.ts"]);
    }

    #[test]
    fn test_discovers_by_pattern_without_tsconfig() {
        let dir = TempDir::new().unwrap();
        write(&dir, "index.d.ts", "export {};");
        write(&dir, "foo-tests.ts", "");
        write(&dir, "test/other-tests.tsx", "");
        write(&dir, "node_modules/dep/dep-tests.ts", "");
        write(&dir, "notes.ts", "");

        let files = Analyzer::new(settings(&dir)).discover().unwrap();

        assert_eq!(files.entry_files, vec!["index.d.ts"]);
        assert_eq!(files.test_files, vec!["foo-tests.ts", "test/other-tests.tsx"]);
    }

    #[test]
    fn test_explicit_files_win() {
        let dir = TempDir::new().unwrap();
        write(&dir, "tsconfig.json", r#"{ "files": ["index.d.ts"] }"#);

        let mut settings = settings(&dir);
        settings.entry_files = vec!["./types\\main.d.ts".to_string()];
        settings.test_files = vec!["check.ts".to_string()];
        let files = Analyzer::new(settings).discover().unwrap();

        assert_eq!(files.entry_files, vec!["types/main.d.ts"]);
        assert_eq!(files.test_files, vec!["check.ts"]);
    }

    #[test]
    fn test_invalid_tsconfig() {
        let dir = TempDir::new().unwrap();
        write(&dir, "tsconfig.json", r#"{ "files": "index.d.ts" }"#);
        assert!(matches!(read_tsconfig_files(dir.path()), Err(WalkerError::TsConfig { .. })));

        write(&dir, "tsconfig.json", "{ not json");
        assert!(matches!(read_tsconfig_files(dir.path()), Err(WalkerError::TsConfig { .. })));
    }

    #[test]
    fn test_tsconfig_without_files_falls_back() {
        let dir = TempDir::new().unwrap();
        write(&dir, "tsconfig.json", r#"{ "compilerOptions": { "strict": true } }"#);
        assert_eq!(read_tsconfig_files(dir.path()).unwrap(), None);
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(compile_patterns(&["[".to_string()]).is_err());
    }

    #[test]
    fn test_analyze_package() {
        let dir = TempDir::new().unwrap();
        write(&dir, "tsconfig.json", r#"{ "files": ["index.d.ts", "foo-tests.ts"] }"#);
        write(&dir, "index.d.ts", "/// <reference types=\"node\" />\nexport function f(): void;\n");
        write(&dir, "foo-tests.ts", "import { f } from \"foo\";\nimport * as assert from \"assert-plus\";\nf();\n");

        let report = Analyzer::new(settings(&dir)).analyze().unwrap();

        assert_eq!(report.package_name, "foo");
        assert_eq!(report.module_info.declared_modules, vec!["foo"]);
        assert_eq!(report.module_info.dependencies, BTreeSet::from(["node".to_string()]));
        assert_eq!(report.test_dependencies, BTreeSet::from(["assert-plus".to_string()]));
    }

    #[test]
    fn test_missing_package_directory() {
        let settings = Settings {
            package_path: PathBuf::from("/definitely/not/here"),
            ..Default::default()
        };
        assert!(matches!(Analyzer::new(settings).analyze(), Err(WalkerError::InvalidPath { .. })));
    }
}
