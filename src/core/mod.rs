//! Core functionality for declaration graph walking and package analysis

pub mod analyzer;
pub mod classifier;
pub mod file_system;
pub mod resolver;
pub mod test_deps;
pub mod walker;

pub use analyzer::{Analyzer, PackageFiles};
pub use classifier::{classify_files, get_module_info};
pub use file_system::{read_file_and_throw_on_bom, DiskFileSystem, FileSystem, MemoryFileSystem};
pub use resolver::resolve_module;
pub use test_deps::get_test_dependencies;
pub use walker::{all_referenced_files, GraphWalker};
