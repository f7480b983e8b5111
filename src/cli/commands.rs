//! Command implementations

use super::Args;
use crate::config::{self, cli::CliConfig, create_default_config, CliArgs, DEFAULT_CONFIG_FILE};
use crate::core::Analyzer;
use crate::error::{Result, WalkerError};
use crate::models::config::Settings;
use crate::output::{create_formatter, create_writer, should_use_colors};
use std::path::PathBuf;
use tracing::{debug, error, info};

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Analyze the package in the specified directory
    Analyze(CliArgs),
    /// Initialize a default configuration file
    Init,
}

impl Command {
    /// Create a command from parsed arguments
    pub fn from_args(args: Args) -> Self {
        if args.init {
            return Command::Init;
        }

        let cli_config = CliConfig::from_args(&args);
        Command::Analyze(cli_config.into_args())
    }

    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        match self {
            Command::Analyze(cli_args) => {
                self.validate()?;

                let settings = config::load_config(cli_args.clone())?;
                debug!(?settings, "resolved settings");

                analyze(&settings)
            }
            Command::Init => {
                let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);

                if config_path.exists() {
                    info!(path = %config_path.display(), "configuration file already exists, leaving it untouched");
                    return Ok(());
                }

                create_default_config(&config_path)?;
                info!(path = %config_path.display(), "created default configuration file");
                Ok(())
            }
        }
    }

    /// Validate the command arguments
    pub fn validate(&self) -> Result<()> {
        match self {
            Command::Analyze(args) => {
                if let Some(path) = &args.path {
                    if !path.exists() {
                        return Err(WalkerError::InvalidPath { path: path.clone() });
                    }
                }

                if let Some(config_path) = &args.config {
                    if !config_path.exists() {
                        return Err(WalkerError::ConfigNotFound {
                            path: config_path.clone(),
                        });
                    }
                }

                Ok(())
            }
            Command::Init => Ok(()),
        }
    }

    /// Run the command and map any failure to an exit code
    pub fn run(&self) -> i32 {
        match self.execute() {
            Ok(()) => 0,
            Err(err) => {
                error!(category = %err.category(), "{}", err.user_message());
                err.exit_code()
            }
        }
    }
}

/// Analyze one package and write its report
pub fn analyze(settings: &Settings) -> Result<()> {
    let report = Analyzer::new(settings.clone()).analyze()?;

    let formatter = create_formatter(
        settings.output_format,
        should_use_colors(settings.use_colors) && settings.output_file.is_none(),
        settings.verbose,
    );
    let content = formatter.format(&report)?;
    create_writer(settings.output_file.as_ref()).write(&content)?;

    if let Some(path) = &settings.output_file {
        info!(path = %path.display(), "report written");
    }
    Ok(())
}
