//! File system access for the analysis core
//!
//! The core only ever asks whether a package-relative path exists and reads a
//! file's text. Both operations go through [`FileSystem`] so the walk can run
//! against a directory on disk or an in-memory package.

use crate::error::{Result, ResultExt, WalkerError};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Package-relative file access
pub trait FileSystem: Send + Sync {
    /// Whether `path` names an existing file
    fn exists(&self, path: &str) -> bool;

    /// Full text content of `path`
    fn read(&self, path: &str) -> Result<String>;
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn exists(&self, path: &str) -> bool {
        (**self).exists(path)
    }

    fn read(&self, path: &str) -> Result<String> {
        (**self).read(path)
    }
}

/// Read `path`, failing if the content starts with a byte-order mark
pub fn read_file_and_throw_on_bom<F: FileSystem + ?Sized>(path: &str, fs: &F) -> Result<String> {
    let text = fs.read(path)?;
    if text.starts_with('\u{feff}') {
        return Err(WalkerError::ByteOrderMark {
            path: path.to_string(),
        });
    }
    Ok(text)
}

/// Files under a directory on disk
#[derive(Debug, Clone)]
pub struct DiskFileSystem {
    root: PathBuf,
}

impl DiskFileSystem {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn full_path(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

impl FileSystem for DiskFileSystem {
    fn exists(&self, path: &str) -> bool {
        self.full_path(path).is_file()
    }

    fn read(&self, path: &str) -> Result<String> {
        let full = self.full_path(path);
        fs::read_to_string(&full).with_path(full)
    }
}

/// Files held in memory, with a per-path read counter
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    files: HashMap<String, String>,
    reads: Mutex<HashMap<String, usize>>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, replacing any previous content
    pub fn with_file(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    /// How many times `path` has been read
    pub fn read_count(&self, path: &str) -> usize {
        self.reads.lock().get(path).copied().unwrap_or(0)
    }

    /// Total reads across all paths
    pub fn total_reads(&self) -> usize {
        self.reads.lock().values().sum()
    }
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    fn read(&self, path: &str) -> Result<String> {
        *self.reads.lock().entry(path.to_string()).or_insert(0) += 1;
        self.files.get(path).cloned().ok_or_else(|| {
            WalkerError::io_error(
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "no such file in package"),
            )
        })
    }
}
