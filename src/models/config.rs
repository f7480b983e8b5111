//! Configuration-related data structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration settings for dts-walker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory holding the declaration package
    pub package_path: PathBuf,

    /// Package name; defaults to the directory name
    pub package_name: Option<String>,

    /// Entry declaration files, relative to the package directory
    pub entry_files: Vec<String>,

    /// Test files, relative to the package directory
    pub test_files: Vec<String>,

    /// File name patterns that identify test files during discovery
    pub test_patterns: Vec<String>,

    /// Output format (text, json)
    pub output_format: OutputFormat,

    /// Output file path (if not specified, output to stdout)
    pub output_file: Option<PathBuf>,

    /// Whether to suppress non-essential output
    pub quiet: bool,

    /// Whether to show debug logging
    pub verbose: bool,

    /// Whether to use colors in text output
    pub use_colors: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            package_path: PathBuf::from("."),
            package_name: None,
            entry_files: Vec::new(),
            test_files: Vec::new(),
            test_patterns: vec!["*-tests.ts".to_string(), "*-tests.tsx".to_string()],
            output_format: OutputFormat::Text,
            output_file: None,
            quiet: false,
            verbose: false,
            use_colors: true,
        }
    }
}

impl Settings {
    /// The configured package name, or the package directory's own name
    pub fn resolved_package_name(&self) -> String {
        if let Some(name) = &self.package_name {
            return name.clone();
        }
        let path = std::fs::canonicalize(&self.package_path).unwrap_or_else(|_| self.package_path.clone());
        path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned())
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Partial settings for configuration merging
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialSettings {
    pub package_path: Option<PathBuf>,
    pub package_name: Option<String>,
    pub entry_files: Option<Vec<String>>,
    pub test_files: Option<Vec<String>>,
    pub test_patterns: Option<Vec<String>>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
    pub use_colors: Option<bool>,
}

impl PartialSettings {
    /// Merge another PartialSettings into this one
    /// Fields from `other` take precedence over existing fields
    pub fn merge_from(&mut self, other: PartialSettings) {
        if other.package_path.is_some() {
            self.package_path = other.package_path;
        }
        if other.package_name.is_some() {
            self.package_name = other.package_name;
        }
        if other.entry_files.is_some() {
            self.entry_files = other.entry_files;
        }
        if other.test_files.is_some() {
            self.test_files = other.test_files;
        }
        if other.test_patterns.is_some() {
            self.test_patterns = other.test_patterns;
        }
        if other.output_format.is_some() {
            self.output_format = other.output_format;
        }
        if other.output_file.is_some() {
            self.output_file = other.output_file;
        }
        if other.quiet.is_some() {
            self.quiet = other.quiet;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
        if other.use_colors.is_some() {
            self.use_colors = other.use_colors;
        }
    }

    /// Convert partial settings to full settings
    /// Uses defaults for any fields that are None
    pub fn to_settings(&self) -> Settings {
        let mut settings = Settings::default();

        if let Some(package_path) = &self.package_path {
            settings.package_path = package_path.clone();
        }
        if let Some(package_name) = &self.package_name {
            settings.package_name = Some(package_name.clone());
        }
        if let Some(entry_files) = &self.entry_files {
            settings.entry_files = entry_files.clone();
        }
        if let Some(test_files) = &self.test_files {
            settings.test_files = test_files.clone();
        }
        if let Some(test_patterns) = &self.test_patterns {
            settings.test_patterns = test_patterns.clone();
        }
        if let Some(output_format) = self.output_format {
            settings.output_format = output_format;
        }
        if let Some(output_file) = &self.output_file {
            settings.output_file = Some(output_file.clone());
        }
        if let Some(quiet) = self.quiet {
            settings.quiet = quiet;
        }
        if let Some(verbose) = self.verbose {
            settings.verbose = verbose;
        }
        if let Some(use_colors) = self.use_colors {
            settings.use_colors = use_colors;
        }

        settings
    }
}
