//! AST parser wrapper using OXC
//!
//! OXC trees borrow from an arena allocator, so each file is lowered into the
//! owned [`SourceFile`] model while the allocator is still alive. The
//! allocator is dropped at the end of the parse.

use crate::error::{Result, WalkerError};
use crate::models::ast::{
    ExportDeclaration, ImportDeclaration, ImportEqualsDeclaration, ModuleBody, ModuleDeclaration,
    ModuleName, ModuleReference, NamedDeclaration, NamespaceExportDeclaration, OtherStatement,
    SourceFile, Statement, VariableStatement,
};
use crate::parsers::directives::scan_triple_slash_directives;
use oxc_allocator::Allocator;
use oxc_ast::ast::{
    BindingIdentifier, BindingPatternKind, Declaration, Statement as OxcStatement, TSImportEqualsDeclaration,
    TSModuleDeclaration, TSModuleDeclarationBody, TSModuleDeclarationName, TSModuleReference,
    VariableDeclaration,
};
use oxc_diagnostics::OxcDiagnostic;
use oxc_parser::{ParseOptions, Parser};
use oxc_span::{GetSpan, SourceType};
use tracing::trace;

/// AST parser using OXC
#[derive(Debug, Clone, Default)]
pub struct ASTParser {
    parse_options: ParseOptions,
}

impl ASTParser {
    /// Create a new AST parser
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `content` as the file `file_name` and lower it to a [`SourceFile`].
    ///
    /// Any parser diagnostic fails the parse.
    pub fn parse(&self, file_name: &str, content: &str) -> Result<SourceFile> {
        // Unknown extensions are treated as declaration files
        let source_type = SourceType::from_path(file_name).unwrap_or_else(|_| SourceType::d_ts());

        let allocator = Allocator::default();
        let ret = Parser::new(&allocator, content, source_type)
            .with_options(self.parse_options.clone())
            .parse();

        if ret.panicked || !ret.errors.is_empty() {
            return Err(WalkerError::Parse {
                path: file_name.to_string(),
                messages: ret.errors.iter().map(OxcDiagnostic::to_string).collect(),
            });
        }

        let lowering = Lowering { source: content };
        let body = &ret.program.body;
        let is_external_module = body.iter().any(is_external_module_indicator);
        let statements = lowering.statements(body);
        let directives = scan_triple_slash_directives(content);

        trace!(
            file = file_name,
            statements = statements.len(),
            is_external_module,
            "parsed declaration file"
        );

        Ok(SourceFile {
            file_name: file_name.to_string(),
            statements,
            referenced_files: directives.paths,
            type_reference_directives: directives.types,
            is_external_module,
        })
    }
}

/// Top-level statements that turn a script into an external module
fn is_external_module_indicator(statement: &OxcStatement<'_>) -> bool {
    match statement {
        OxcStatement::ImportDeclaration(_)
        | OxcStatement::ExportAllDeclaration(_)
        | OxcStatement::ExportNamedDeclaration(_)
        | OxcStatement::ExportDefaultDeclaration(_)
        | OxcStatement::TSExportAssignment(_) => true,
        OxcStatement::TSImportEqualsDeclaration(decl) => {
            matches!(decl.module_reference, TSModuleReference::ExternalModuleReference(_))
        }
        _ => false,
    }
}

struct Lowering<'s> {
    source: &'s str,
}

impl Lowering<'_> {
    fn statements(&self, statements: &[OxcStatement<'_>]) -> Vec<Statement> {
        statements.iter().map(|statement| self.statement(statement)).collect()
    }

    fn statement(&self, statement: &OxcStatement<'_>) -> Statement {
        match statement {
            OxcStatement::ImportDeclaration(decl) => Statement::Import(ImportDeclaration {
                module_specifier: decl.source.value.to_string(),
            }),
            OxcStatement::ExportAllDeclaration(decl) => Statement::Export(ExportDeclaration {
                module_specifier: Some(decl.source.value.to_string()),
            }),
            OxcStatement::ExportNamedDeclaration(decl) => match &decl.declaration {
                // `export declare function f()` is the declaration itself
                Some(declaration) => self.declaration(declaration),
                None => Statement::Export(ExportDeclaration {
                    module_specifier: decl.source.as_ref().map(|source| source.value.to_string()),
                }),
            },
            OxcStatement::ExportDefaultDeclaration(_) | OxcStatement::TSExportAssignment(_) => {
                Statement::Export(ExportDeclaration { module_specifier: None })
            }
            OxcStatement::TSNamespaceExportDeclaration(decl) => {
                Statement::NamespaceExport(NamespaceExportDeclaration {
                    name: decl.id.name.to_string(),
                })
            }
            OxcStatement::TSModuleDeclaration(decl) => Statement::Module(self.module(decl)),
            OxcStatement::VariableDeclaration(decl) => Statement::Variable(variable(decl)),
            OxcStatement::ClassDeclaration(class) => Statement::Class(named(class.id.as_ref())),
            OxcStatement::FunctionDeclaration(function) => {
                Statement::Function(named(function.id.as_ref()))
            }
            OxcStatement::TSEnumDeclaration(decl) => Statement::Enum(named(Some(&decl.id))),
            OxcStatement::TSInterfaceDeclaration(decl) => {
                Statement::Interface(named(Some(&decl.id)))
            }
            OxcStatement::TSTypeAliasDeclaration(decl) => {
                Statement::TypeAlias(named(Some(&decl.id)))
            }
            OxcStatement::TSImportEqualsDeclaration(decl) => {
                Statement::ImportEquals(self.import_equals(decl))
            }
            other => Statement::Other(OtherStatement::new(statement_kind(other))),
        }
    }

    fn declaration(&self, declaration: &Declaration<'_>) -> Statement {
        match declaration {
            Declaration::VariableDeclaration(decl) => Statement::Variable(variable(decl)),
            Declaration::FunctionDeclaration(function) => {
                Statement::Function(named(function.id.as_ref()))
            }
            Declaration::ClassDeclaration(class) => Statement::Class(named(class.id.as_ref())),
            Declaration::TSTypeAliasDeclaration(decl) => Statement::TypeAlias(named(Some(&decl.id))),
            Declaration::TSInterfaceDeclaration(decl) => Statement::Interface(named(Some(&decl.id))),
            Declaration::TSEnumDeclaration(decl) => Statement::Enum(named(Some(&decl.id))),
            Declaration::TSModuleDeclaration(decl) => Statement::Module(self.module(decl)),
            Declaration::TSImportEqualsDeclaration(decl) => {
                Statement::ImportEquals(self.import_equals(decl))
            }
        }
    }

    fn module(&self, decl: &TSModuleDeclaration<'_>) -> ModuleDeclaration {
        let name = match &decl.id {
            TSModuleDeclarationName::Identifier(id) => ModuleName::Identifier(id.name.to_string()),
            TSModuleDeclarationName::StringLiteral(literal) => {
                ModuleName::StringLiteral(literal.value.to_string())
            }
        };
        let body = decl.body.as_ref().map(|body| match body {
            TSModuleDeclarationBody::TSModuleDeclaration(inner) => {
                ModuleBody::Namespace(Box::new(self.module(inner)))
            }
            TSModuleDeclarationBody::TSModuleBlock(block) => {
                ModuleBody::Block(self.statements(&block.body))
            }
        });
        ModuleDeclaration { name, body }
    }

    fn import_equals(&self, decl: &TSImportEqualsDeclaration<'_>) -> ImportEqualsDeclaration {
        let module_reference = match &decl.module_reference {
            TSModuleReference::ExternalModuleReference(reference) => {
                ModuleReference::External(reference.expression.value.to_string())
            }
            other => {
                let span = other.span();
                let text = self
                    .source
                    .get(span.start as usize..span.end as usize)
                    .unwrap_or_default();
                ModuleReference::EntityName(text.to_string())
            }
        };
        ImportEqualsDeclaration {
            name: decl.id.name.to_string(),
            module_reference,
        }
    }
}

fn variable(decl: &VariableDeclaration<'_>) -> VariableStatement {
    let names = decl
        .declarations
        .iter()
        .map(|declarator| match &declarator.id.kind {
            BindingPatternKind::BindingIdentifier(id) => Some(id.name.to_string()),
            _ => None,
        })
        .collect();
    VariableStatement { names }
}

fn named(id: Option<&BindingIdentifier<'_>>) -> NamedDeclaration {
    NamedDeclaration {
        name: id.map(|id| id.name.to_string()),
    }
}

fn statement_kind(statement: &OxcStatement<'_>) -> &'static str {
    match statement {
        OxcStatement::BlockStatement(_) => "Block",
        OxcStatement::BreakStatement(_) => "BreakStatement",
        OxcStatement::ContinueStatement(_) => "ContinueStatement",
        OxcStatement::DebuggerStatement(_) => "DebuggerStatement",
        OxcStatement::DoWhileStatement(_) => "DoStatement",
        OxcStatement::EmptyStatement(_) => "EmptyStatement",
        OxcStatement::ExpressionStatement(_) => "ExpressionStatement",
        OxcStatement::ForInStatement(_) => "ForInStatement",
        OxcStatement::ForOfStatement(_) => "ForOfStatement",
        OxcStatement::ForStatement(_) => "ForStatement",
        OxcStatement::IfStatement(_) => "IfStatement",
        OxcStatement::LabeledStatement(_) => "LabeledStatement",
        OxcStatement::ReturnStatement(_) => "ReturnStatement",
        OxcStatement::SwitchStatement(_) => "SwitchStatement",
        OxcStatement::ThrowStatement(_) => "ThrowStatement",
        OxcStatement::TryStatement(_) => "TryStatement",
        OxcStatement::WhileStatement(_) => "WhileStatement",
        OxcStatement::WithStatement(_) => "WithStatement",
        _ => "Statement",
    }
}
