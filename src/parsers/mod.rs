//! Parsing functionality for declaration files
//!
//! This module turns file content into the owned syntax model and extracts the
//! references each file makes.

pub mod ast_parser;
pub mod directives;
pub mod references;

pub use ast_parser::ASTParser;
pub use directives::{scan_triple_slash_directives, TripleSlashDirectives};
pub use references::{imports, is_relative, root_name, Imports};
