//! dts-walker - structural summaries of TypeScript declaration packages
//!
//! Given the entry files of a package of ambient declaration files, this
//! library follows every relative import and `/// <reference path>` directive,
//! parses each reachable file once and reports:
//!
//! - the packages the declarations depend on,
//! - the module names the package declares,
//! - the global values script files introduce.
//!
//! Test files get a shallower audit that finds dependencies only the tests use.
//!
//! ```no_run
//! use dts_walker::core::{get_module_info, DiskFileSystem};
//!
//! let fs = DiskFileSystem::new("types/lodash");
//! let info = get_module_info("lodash", &["index.d.ts".to_string()], &fs)?;
//! println!("{:?}", info.declared_modules);
//! # Ok::<(), dts_walker::WalkerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod output;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use crate::core::{
    all_referenced_files, get_module_info, get_test_dependencies, Analyzer, DiskFileSystem, FileSystem,
    MemoryFileSystem,
};
pub use error::{ErrorCategory, Result, ResultExt, WalkerError};
pub use models::{config::Settings, ModuleInfo, PackageReport, Reference, SourceFile, Statement};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
