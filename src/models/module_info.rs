//! Analysis output records

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Structural summary of a declaration package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleInfo {
    /// Every file reached from the entry files, sorted
    pub decl_files: Vec<String>,
    /// Root names of the packages these declarations depend on
    pub dependencies: BTreeSet<String>,
    /// Module names the package exposes, in discovery order
    pub declared_modules: Vec<String>,
    /// Global value names introduced by script files, sorted
    pub globals: Vec<String>,
}

/// Everything the CLI reports for one package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageReport {
    pub package_name: String,
    pub module_info: ModuleInfo,
    pub test_dependencies: BTreeSet<String>,
}
