//! Test-file dependency auditing
//!
//! Test files are parsed one level deep, without following their references.
//! They may pull in packages the declarations do not, but must not repeat a
//! dependency the declarations already carry.

use crate::core::file_system::{read_file_and_throw_on_bom, FileSystem};
use crate::error::{Result, WalkerError};
use crate::parsers::{imports, is_relative, ASTParser};
use crate::utils::paths::join_paths;
use std::collections::BTreeSet;
use tracing::debug;

/// Extra packages referenced only by `test_files`.
///
/// `dependencies` is the package's own dependency set and is only read.
pub fn get_test_dependencies<F>(
    package_name: &str,
    test_files: &[String],
    dependencies: &BTreeSet<String>,
    fs: &F,
) -> Result<BTreeSet<String>>
where
    F: FileSystem + ?Sized,
{
    let parser = ASTParser::new();
    let mut test_dependencies = BTreeSet::new();

    for file_name in test_files {
        let content = read_file_and_throw_on_bom(file_name, fs)?;
        let source = parser.parse(file_name, &content)?;
        let file_path = || join_paths(package_name, &source.file_name);

        if let Some(reference) = source.referenced_files.first() {
            return Err(WalkerError::TestPathReference {
                file: file_path(),
                reference: reference.clone(),
            });
        }

        for referenced in &source.type_reference_directives {
            if dependencies.contains(referenced) {
                return Err(WalkerError::RedundantTestReference {
                    file: file_path(),
                    dependency: referenced.clone(),
                });
            }
            if referenced == package_name {
                return Err(WalkerError::SelfTestReference { file: file_path() });
            }
            test_dependencies.insert(referenced.clone());
        }

        for imported in imports(&source.statements) {
            if !is_relative(imported) && !dependencies.contains(imported) && imported != package_name {
                test_dependencies.insert(imported.to_string());
            }
        }

        debug!(file = %file_name, "audited test file");
    }

    Ok(test_dependencies)
}
