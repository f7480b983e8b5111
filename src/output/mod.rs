//! Output formatting, writing and logging

mod formatters;
pub mod logger;
mod writers;

pub use self::logger::{init_logger, should_use_colors};
pub use self::writers::{create_writer, FileWriter, OutputWriter, StdoutWriter};

use crate::error::Result;
use crate::models::config::OutputFormat;
use crate::models::PackageReport;

/// Trait for different output formatters
pub trait Formatter {
    /// Format a package report into a string
    fn format(&self, report: &PackageReport) -> Result<String>;
}

/// Text formatter for human-readable output
pub struct TextFormatter {
    pub use_colors: bool,
    pub verbose: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(use_colors: bool, verbose: bool) -> Self {
        Self { use_colors, verbose }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, report: &PackageReport) -> Result<String> {
        Ok(formatters::format_report_text(report, self.use_colors, self.verbose))
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    pub pretty: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, report: &PackageReport) -> Result<String> {
        formatters::format_report_json(report, self.pretty)
    }
}

/// Create a formatter based on the output format
pub fn create_formatter(format: OutputFormat, use_colors: bool, verbose: bool) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(use_colors, verbose)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
    }
}
