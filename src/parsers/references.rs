//! Module specifiers referenced by import-like statements
//!
//! Covers `import`, `export ... from`, `import x = require(...)` and imports
//! nested inside `declare module "x" { }` blocks. Triple-slash directives are
//! not included; they live on [`SourceFile`](crate::models::SourceFile).

use crate::models::ast::{ModuleBody, ModuleName, ModuleReference, Statement};
use std::slice;

/// Iterate every module specifier imported by `statements`
pub fn imports(statements: &[Statement]) -> Imports<'_> {
    Imports {
        stack: vec![statements.iter()],
    }
}

/// Lazy iterator returned by [`imports`]
#[derive(Debug, Clone)]
pub struct Imports<'a> {
    stack: Vec<slice::Iter<'a, Statement>>,
}

impl<'a> Iterator for Imports<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let statement = match self.stack.last_mut()?.next() {
                Some(statement) => statement,
                None => {
                    self.stack.pop();
                    continue;
                }
            };

            match statement {
                Statement::Import(decl) => return Some(&decl.module_specifier),
                Statement::Export(decl) => {
                    if let Some(specifier) = &decl.module_specifier {
                        return Some(specifier);
                    }
                }
                Statement::ImportEquals(decl) => {
                    if let ModuleReference::External(specifier) = &decl.module_reference {
                        return Some(specifier);
                    }
                }
                Statement::Module(decl) => {
                    if let (ModuleName::StringLiteral(_), Some(ModuleBody::Block(body))) =
                        (&decl.name, &decl.body)
                    {
                        self.stack.push(body.iter());
                    }
                }
                _ => {}
            }
        }
    }
}

/// Whether a specifier points into the package rather than at another package
pub fn is_relative(specifier: &str) -> bool {
    specifier.starts_with('.')
}

/// Package root of a non-relative specifier.
///
/// `"foo/bar/baz"` gives `"foo"`; scoped names keep their scope, so
/// `"@foo/bar/baz"` gives `"@foo/bar"`.
pub fn root_name(specifier: &str) -> &str {
    let mut slash = specifier.find('/');
    if specifier.starts_with('@') {
        slash = slash.and_then(|first| specifier[first + 1..].find('/').map(|second| first + 1 + second));
    }
    match slash {
        Some(index) => &specifier[..index],
        None => specifier,
    }
}
