//! Owned syntax tree for declaration files
//!
//! The parser lowers OXC's arena-allocated tree into these types right after
//! parsing, so a `SourceFile` outlives its allocator and can be shared across
//! threads. Only the statement kinds that matter to module classification get
//! their own variant; everything else is kept as `Other` with its kind name.

/// A parsed declaration file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Package-relative, slash-normalised file name
    pub file_name: String,
    pub statements: Vec<Statement>,
    /// Targets of `/// <reference path="..." />`
    pub referenced_files: Vec<String>,
    /// Targets of `/// <reference types="..." />`
    pub type_reference_directives: Vec<String>,
    /// Whether the file has at least one top-level import or export
    pub is_external_module: bool,
}

/// Top-level or namespace-body statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `import ... from "x"` / `import "x"`
    Import(ImportDeclaration),
    /// `export { ... } [from "x"]`, `export * from "x"`, `export default ...`, `export = x`
    Export(ExportDeclaration),
    /// `export as namespace X`
    NamespaceExport(NamespaceExportDeclaration),
    /// `module` / `namespace` / `declare global`
    Module(ModuleDeclaration),
    Variable(VariableStatement),
    Class(NamedDeclaration),
    Function(NamedDeclaration),
    Enum(NamedDeclaration),
    Interface(NamedDeclaration),
    TypeAlias(NamedDeclaration),
    /// `import x = require("y")` / `import x = A.B`
    ImportEquals(ImportEqualsDeclaration),
    /// Any other statement, named by its syntax kind
    Other(OtherStatement),
}

impl Statement {
    /// Syntax kind name, used in diagnostics
    pub fn kind_name(&self) -> &str {
        match self {
            Statement::Import(_) => "ImportDeclaration",
            Statement::Export(_) => "ExportDeclaration",
            Statement::NamespaceExport(_) => "NamespaceExportDeclaration",
            Statement::Module(_) => "ModuleDeclaration",
            Statement::Variable(_) => "VariableStatement",
            Statement::Class(_) => "ClassDeclaration",
            Statement::Function(_) => "FunctionDeclaration",
            Statement::Enum(_) => "EnumDeclaration",
            Statement::Interface(_) => "InterfaceDeclaration",
            Statement::TypeAlias(_) => "TypeAliasDeclaration",
            Statement::ImportEquals(_) => "ImportEqualsDeclaration",
            Statement::Other(other) => &other.kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDeclaration {
    pub module_specifier: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDeclaration {
    /// Present for re-exports (`export ... from "x"`)
    pub module_specifier: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceExportDeclaration {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDeclaration {
    pub name: ModuleName,
    /// `None` for shorthand ambient modules (`declare module "x";`)
    pub body: Option<ModuleBody>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleName {
    /// `namespace Foo`
    Identifier(String),
    /// `declare module "foo"`
    StringLiteral(String),
}

impl ModuleName {
    pub fn text(&self) -> &str {
        match self {
            ModuleName::Identifier(name) | ModuleName::StringLiteral(name) => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleBody {
    /// The `B` in `namespace A.B { }`
    Namespace(Box<ModuleDeclaration>),
    Block(Vec<Statement>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableStatement {
    /// One entry per declarator; `None` for destructuring patterns
    pub names: Vec<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedDeclaration {
    /// `None` when the syntax leaves the declaration unnamed
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportEqualsDeclaration {
    pub name: String,
    pub module_reference: ModuleReference,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleReference {
    /// `require("x")`
    External(String),
    /// `A.B.C`
    EntityName(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtherStatement {
    pub kind: String,
}

impl OtherStatement {
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }
}
