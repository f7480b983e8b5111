//! Report destinations

use crate::error::{Result, WalkerError};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Somewhere a rendered report can go
pub trait OutputWriter {
    fn write(&self, content: &str) -> Result<()>;
}

/// Writes to the process stdout
#[derive(Debug)]
pub struct StdoutWriter;

impl OutputWriter for StdoutWriter {
    fn write(&self, content: &str) -> Result<()> {
        emit(io::stdout().lock(), content).map_err(|source| WalkerError::OutputWrite {
            path: PathBuf::from("<stdout>"),
            source,
        })
    }
}

/// Writes a report file.
///
/// Content goes to a sibling `.partial` file first and is renamed into place,
/// so an interrupted run never leaves a truncated report behind.
#[derive(Debug)]
pub struct FileWriter {
    path: PathBuf,
}

impl FileWriter {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn partial_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".partial");
        self.path.with_file_name(name)
    }
}

impl OutputWriter for FileWriter {
    fn write(&self, content: &str) -> Result<()> {
        let partial = self.partial_path();
        let write_error = |source| WalkerError::OutputWrite {
            path: self.path.clone(),
            source,
        };

        File::create(&partial)
            .and_then(|file| emit(file, content))
            .map_err(write_error)?;

        fs::rename(&partial, &self.path).map_err(|source| {
            let _ = fs::remove_file(&partial);
            write_error(source)
        })
    }
}

fn emit(out: impl Write, content: &str) -> io::Result<()> {
    let mut out = BufWriter::new(out);
    out.write_all(content.as_bytes())?;
    out.flush()
}

/// Pick the destination for a report: the given file, or stdout
pub fn create_writer(output_file: Option<impl AsRef<Path>>) -> Box<dyn OutputWriter> {
    match output_file {
        Some(path) => Box::new(FileWriter::new(path)),
        None => Box::new(StdoutWriter),
    }
}
