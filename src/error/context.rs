//! Error context utilities
//!
//! Adds path context to IO failures so every error names the offending file.

use std::path::Path;

use crate::error::{Result, WalkerError};

/// Extension trait for IO results to attach the path that failed
pub trait ResultExt<T> {
    /// Convert an IO error into `WalkerError::Io` for `path`
    fn with_path<P: AsRef<Path>>(self, path: P) -> Result<T>;
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_path<P: AsRef<Path>>(self, path: P) -> Result<T> {
        self.map_err(|err| WalkerError::io_error(path.as_ref(), err))
    }
}
