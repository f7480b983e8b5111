//! Symbol classification
//!
//! Decides for each parsed file whether it is a proper external module or a
//! global script and collects the names it contributes to the package summary.
//! Every rule here is a pure function over the owned statement model, so the
//! policy can be exercised without touching a parser or a file system.

use crate::core::file_system::FileSystem;
use crate::core::walker::{all_referenced_files, assert_no_windows_slashes};
use crate::error::{Result, WalkerError};
use crate::models::ast::{ModuleBody, ModuleDeclaration, ModuleName, SourceFile, Statement};
use crate::models::ModuleInfo;
use crate::parsers::{imports, is_relative, root_name};
use crate::utils::paths::{basename, dirname, join_paths};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info};

/// Walk the package from `entry_files` and summarise it
pub fn get_module_info<F>(package_name: &str, entry_files: &[String], fs: &F) -> Result<ModuleInfo>
where
    F: FileSystem + ?Sized,
{
    let files = all_referenced_files(entry_files, fs)?;
    let info = classify_files(package_name, &files)?;
    info!(
        package = package_name,
        files = info.decl_files.len(),
        dependencies = info.dependencies.len(),
        modules = info.declared_modules.len(),
        globals = info.globals.len(),
        "classified package"
    );
    Ok(info)
}

/// Summarise an already-parsed set of files
pub fn classify_files(package_name: &str, files: &BTreeMap<String, SourceFile>) -> Result<ModuleInfo> {
    let mut dependencies = BTreeSet::new();
    let mut declared_modules = Vec::new();
    let mut globals = BTreeSet::new();

    let mut add_dependency = |name: &str| {
        if name != package_name {
            dependencies.insert(name.to_string());
        }
    };

    for source in files.values() {
        for specifier in imports(&source.statements) {
            if !is_relative(specifier) {
                add_dependency(root_name(specifier));
            }
        }
        for types in &source.type_reference_directives {
            add_dependency(types);
        }

        if source.is_external_module {
            if source_file_exports_something(&source.statements) {
                let name = proper_module_name(package_name, &source.file_name)?;
                debug!(file = %source.file_name, module = %name, "declares module");
                declared_modules.push(name);

                let namespace_export = source.statements.iter().find_map(|statement| match statement {
                    Statement::NamespaceExport(decl) => Some(&decl.name),
                    _ => None,
                });
                if let Some(name) = namespace_export {
                    globals.insert(name.clone());
                }
            }
        } else {
            collect_script_symbols(source, &mut declared_modules, &mut globals)?;
        }
    }

    Ok(ModuleInfo {
        decl_files: files.keys().cloned().collect(),
        dependencies,
        declared_modules,
        globals: globals.into_iter().collect(),
    })
}

fn collect_script_symbols(
    source: &SourceFile,
    declared_modules: &mut Vec<String>,
    globals: &mut BTreeSet<String>,
) -> Result<()> {
    for statement in &source.statements {
        match statement {
            Statement::Module(decl) => match &decl.name {
                ModuleName::StringLiteral(name) => {
                    assert_no_windows_slashes(&source.file_name, name)?;
                    declared_modules.push(name.clone());
                }
                ModuleName::Identifier(name) => {
                    if is_value_namespace(decl)? {
                        globals.insert(name.clone());
                    }
                }
            },
            Statement::Variable(decl) => {
                globals.extend(decl.names.iter().flatten().cloned());
            }
            // Types have no runtime presence, so interfaces and aliases are skipped
            Statement::Enum(decl) | Statement::Class(decl) | Statement::Function(decl) => {
                if let Some(name) = &decl.name {
                    globals.insert(name.clone());
                }
            }
            _ => {}
        }
    }
    Ok(())
}

/// Whether a module file has at least one genuine export.
///
/// A file made only of imports likely just augments another module.
pub fn source_file_exports_something(statements: &[Statement]) -> bool {
    statements.iter().any(|statement| match statement {
        Statement::Import(_) | Statement::ImportEquals(_) => false,
        Statement::Module(decl) => matches!(decl.name, ModuleName::Identifier(_)),
        _ => true,
    })
}

/// Module name declared by a module file.
///
/// `index.d.ts` declares the package itself, `lib/index.d.ts` declares
/// `pkg/lib` and `lib/a.d.ts` declares `pkg/lib/a`.
pub fn proper_module_name(package_name: &str, file_name: &str) -> Result<String> {
    let part = if basename(file_name) == "index.d.ts" {
        dirname(file_name)
    } else {
        file_name
            .strip_suffix(".d.ts")
            .ok_or_else(|| WalkerError::MissingDeclarationExtension {
                file: file_name.to_string(),
            })?
    };

    if part == "." {
        Ok(package_name.to_string())
    } else {
        Ok(join_paths(package_name, part))
    }
}

/// Whether a namespace declares anything with a runtime value
pub fn is_value_namespace(namespace: &ModuleDeclaration) -> Result<bool> {
    match &namespace.body {
        None => Err(WalkerError::ShorthandAmbientModule {
            name: namespace.name.text().to_string(),
        }),
        Some(ModuleBody::Namespace(inner)) => is_value_namespace(inner),
        Some(ModuleBody::Block(statements)) => {
            for statement in statements {
                if statement_declares_value(statement)? {
                    return Ok(true);
                }
            }
            Ok(false)
        }
    }
}

/// Whether a namespace body statement declares a value
pub fn statement_declares_value(statement: &Statement) -> Result<bool> {
    match statement {
        Statement::Variable(_) | Statement::Class(_) | Statement::Function(_) | Statement::Enum(_) => Ok(true),
        Statement::Module(decl) => is_value_namespace(decl),
        Statement::Interface(_) | Statement::TypeAlias(_) | Statement::ImportEquals(_) => Ok(false),
        Statement::Import(_) | Statement::Export(_) | Statement::NamespaceExport(_) | Statement::Other(_) => {
            Err(WalkerError::UnhandledNamespaceStatement {
                kind: statement.kind_name().to_string(),
            })
        }
    }
}
