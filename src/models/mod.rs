//! Data models and structures for dts-walker

pub mod ast;
pub mod config;
pub mod module_info;
pub mod reference;

pub use ast::{SourceFile, Statement};
pub use config::Settings;
pub use module_info::{ModuleInfo, PackageReport};
pub use reference::Reference;
