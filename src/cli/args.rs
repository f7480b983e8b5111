//! Command-line argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// dts-walker - dependency and symbol summary for TypeScript declaration packages
#[derive(Parser, Debug)]
#[command(name = "dts-walker")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Summarise the dependencies, modules and globals of a declaration package")]
#[command(long_about = "dts-walker follows every file reachable from a package's entry declaration files, \
through relative imports and `/// <reference path>` directives, and reports the packages it depends on, \
the module names it declares and the global values it introduces. Test files are audited for dependencies \
that the declarations do not already carry.")]
#[command(after_help = "EXAMPLES:

Basic Usage:
    # Analyze the package in the current directory
    dts-walker

    # Analyze a specific package directory
    dts-walker --path ./types/lodash

    # Override the package name (defaults to the directory name)
    dts-walker --path ./types/lodash --name lodash

File Selection:
    # Use explicit entry files instead of tsconfig.json or index.d.ts
    dts-walker --entry index.d.ts --entry fp.d.ts

    # Use explicit test files
    dts-walker --test lodash-tests.ts

Output Options:
    # JSON output for tooling
    dts-walker --output json

    # Save the report to a file
    dts-walker --output json --output-file report.json

    # Disable colored output
    dts-walker --no-colors

Configuration:
    # Use a specific configuration file
    dts-walker --config ./dts-walker.toml

    # Create a default configuration file
    dts-walker --init
")]
pub struct Args {
    /// Package directory to analyze
    #[arg(short, long, value_name = "PATH", help = "Declaration package directory (defaults to the current directory)")]
    pub path: Option<PathBuf>,

    /// Package name
    #[arg(short, long, value_name = "NAME", help = "Name of the package under analysis (defaults to the directory name)")]
    pub name: Option<String>,

    /// Entry declaration files
    #[arg(short, long, value_name = "FILE", help = "Entry declaration file, relative to the package (can be specified multiple times)")]
    pub entry: Vec<String>,

    /// Test files
    #[arg(short, long, value_name = "FILE", help = "Test file, relative to the package (can be specified multiple times)")]
    pub test: Vec<String>,

    /// Output format (text, json)
    #[arg(short, long, value_enum, help = "Output format: 'text' for humans, 'json' for tooling (defaults to text)")]
    pub output: Option<OutputFormat>,

    /// Output file path (stdout if not specified)
    #[arg(long, value_name = "FILE", help = "File to write the report to (uses stdout if not specified)")]
    pub output_file: Option<PathBuf>,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose", help = "Only log errors; the report itself is still printed")]
    pub quiet: bool,

    /// Log every parsed file
    #[arg(short, long, help = "Show debug logging for every file visited")]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", help = "Path to configuration file (defaults to .dts-walker.toml in the current directory)")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, help = "Disable colored output (useful when piping the text report)")]
    pub no_colors: bool,

    /// Initialize a default configuration file
    #[arg(long, help = "Create a default configuration file (.dts-walker.toml) in the current directory")]
    pub init: bool,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}
