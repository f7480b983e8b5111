//! Error types and definitions for dts-walker
//!
//! Every error in the analysis core is fatal to the current analysis call.
//! Errors are grouped into categories so the CLI can report them and pick an
//! exit code without matching on every variant.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Broad classes of failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The declaration files themselves are malformed
    MalformedInput,
    /// The package layout breaks a packaging rule
    StructuralViolation,
    /// A statement kind reached code that assumes it cannot occur
    InvariantViolation,
    /// File system, configuration or output problems outside the package content
    Environment,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::MalformedInput => write!(f, "MALFORMED INPUT"),
            ErrorCategory::StructuralViolation => write!(f, "STRUCTURAL VIOLATION"),
            ErrorCategory::InvariantViolation => write!(f, "INTERNAL ERROR"),
            ErrorCategory::Environment => write!(f, "ERROR"),
        }
    }
}

/// Main error type for dts-walker operations
#[derive(Debug, Error)]
pub enum WalkerError {
    /// IO error while touching a specific path
    #[error("IO error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content starts with a byte-order mark
    #[error("File '{path}' has a BOM. Please remove it.")]
    ByteOrderMark { path: String },

    /// The parser reported diagnostics for a file
    #[error("Failed to parse {path}: {}", .messages.join("; "))]
    Parse { path: String, messages: Vec<String> },

    /// A reference or module name used a backslash
    #[error("In {file}: Use forward slash instead when referencing {reference}")]
    BackslashInPath { file: String, reference: String },

    /// `declare module "x";` without a body
    #[error("Declarations should not use shorthand ambient modules (module '{name}')")]
    ShorthandAmbientModule { name: String },

    /// A module file whose name does not carry the declaration extension
    #[error("Expected '{file}' to end with '.d.ts'")]
    MissingDeclarationExtension { file: String },

    /// A relative reference that leaves the package directory
    #[error(
        "{file}: Definitions must use global references to other packages, not parent (\"../xxx\") references. (Based on reference '{reference}')"
    )]
    EscapingReference { file: String, reference: String },

    /// A test file used `/// <reference path>`
    #[error("Test files should not use '<reference path=\"\" />'. '{file}' references '{reference}'.")]
    TestPathReference { file: String, reference: String },

    /// A test file re-declared a dependency the declarations already have
    #[error("'{file}' unnecessarily references '{dependency}', which is already referenced in the type definition.")]
    RedundantTestReference { file: String, dependency: String },

    /// A test file referenced the package under test by name
    #[error("'{file}' unnecessarily references the package. This can be removed.")]
    SelfTestReference { file: String },

    /// A namespace body contained a statement kind the classifier does not handle
    #[error("Forgot to implement ambient namespace statement {kind}")]
    UnhandledNamespaceStatement { kind: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Configuration file not found
    #[error("Configuration file not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Invalid path errors
    #[error("Invalid path: {path}")]
    InvalidPath { path: PathBuf },

    /// tsconfig.json could not be understood
    #[error("Invalid tsconfig.json in {path}: {message}")]
    TsConfig { path: PathBuf, message: String },

    /// Output file write errors
    #[error("Error writing to output {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON serialization error: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
    },
}

impl WalkerError {
    /// Get the category of this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            WalkerError::ByteOrderMark { .. }
            | WalkerError::Parse { .. }
            | WalkerError::BackslashInPath { .. }
            | WalkerError::ShorthandAmbientModule { .. }
            | WalkerError::MissingDeclarationExtension { .. } => ErrorCategory::MalformedInput,

            WalkerError::EscapingReference { .. }
            | WalkerError::TestPathReference { .. }
            | WalkerError::RedundantTestReference { .. }
            | WalkerError::SelfTestReference { .. } => ErrorCategory::StructuralViolation,

            WalkerError::UnhandledNamespaceStatement { .. } => ErrorCategory::InvariantViolation,

            _ => ErrorCategory::Environment,
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Environment => 1,
            ErrorCategory::MalformedInput => 2,
            ErrorCategory::StructuralViolation => 3,
            ErrorCategory::InvariantViolation => 70,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            WalkerError::Io { path, source } => {
                format!("File system error on '{}': {}. Check that the file exists and is readable.", path.display(), source)
            }
            WalkerError::InvalidPath { path } => {
                format!("Invalid path: '{}'. Please provide an existing package directory.", path.display())
            }
            WalkerError::ConfigNotFound { path } => {
                format!("Configuration file not found at '{}'. Create a config file or use command line options.", path.display())
            }
            WalkerError::UnhandledNamespaceStatement { .. } => {
                format!("{}. This is a bug in dts-walker, please report it.", self)
            }
            _ => self.to_string(),
        }
    }

    /// Create an IO error with path context
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        WalkerError::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        WalkerError::Config {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for WalkerError {
    fn from(err: serde_json::Error) -> Self {
        WalkerError::JsonSerialize { source: err }
    }
}

/// Result type alias for dts-walker operations
pub type Result<T> = std::result::Result<T, WalkerError>;
