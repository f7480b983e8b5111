//! Settings validation

use std::path::Path;

use crate::core::analyzer::compile_patterns;
use crate::error::{Result, WalkerError};
use crate::models::config::Settings;

/// Settings validator for ensuring configuration is valid
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and return errors if invalid
    pub fn validate(settings: &Settings) -> Result<()> {
        if !settings.package_path.is_dir() {
            return Err(WalkerError::InvalidPath {
                path: settings.package_path.clone(),
            });
        }

        if let Some(name) = &settings.package_name {
            if name.trim().is_empty() {
                return Err(WalkerError::config_error("Package name must not be empty"));
            }
        }

        compile_patterns(&settings.test_patterns)?;

        if settings.quiet && settings.verbose {
            return Err(WalkerError::config_error("quiet and verbose cannot both be enabled"));
        }

        if let Some(path) = &settings.output_file {
            Self::validate_output_path(path)?;
        }

        Ok(())
    }

    /// The output file's directory must already exist
    fn validate_output_path(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                return Err(WalkerError::InvalidPath {
                    path: parent.to_path_buf(),
                });
            }
        }
        Ok(())
    }
}
