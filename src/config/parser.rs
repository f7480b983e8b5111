//! Configuration file parsing utilities

use std::fs;
use std::path::{Path, PathBuf};

use super::file::DEFAULT_CONFIG_FILE;
use crate::error::{Result, ResultExt, WalkerError};
use crate::models::config::PartialSettings;

/// Parse a TOML configuration file into PartialSettings
pub fn parse_config_file<P: AsRef<Path>>(path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(WalkerError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).with_path(path)?;
    parse_config_content(&content, path)
}

/// Parse TOML configuration content into PartialSettings
pub fn parse_config_content<P: AsRef<Path>>(content: &str, path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    let settings: PartialSettings = toml::from_str(content).map_err(|e| WalkerError::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    validate_partial_settings(&settings, path)?;

    Ok(settings)
}

/// Validate partial settings for obvious errors
pub fn validate_partial_settings<P: AsRef<Path>>(settings: &PartialSettings, path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(package_path) = &settings.package_path {
        if package_path.as_os_str().is_empty() {
            return Err(WalkerError::config_error(format!(
                "Invalid empty package_path in config file: {}",
                path.display()
            )));
        }
    }

    if let Some(name) = &settings.package_name {
        if name.trim().is_empty() {
            return Err(WalkerError::config_error(format!(
                "Invalid empty package_name in config file: {}",
                path.display()
            )));
        }
    }

    for files in [&settings.entry_files, &settings.test_files].into_iter().flatten() {
        if files.iter().any(|file| file.is_empty()) {
            return Err(WalkerError::config_error(format!(
                "Empty file name in config file: {}",
                path.display()
            )));
        }
    }

    if let Some(patterns) = &settings.test_patterns {
        for pattern in patterns {
            if pattern.is_empty() {
                return Err(WalkerError::config_error(format!(
                    "Empty test pattern in config file: {}",
                    path.display()
                )));
            }

            glob::Pattern::new(pattern).map_err(|e| {
                WalkerError::config_error(format!(
                    "Invalid test pattern '{}' in config file: {}: {}",
                    pattern,
                    path.display(),
                    e
                ))
            })?;
        }
    }

    if let Some(output_file) = &settings.output_file {
        if output_file.as_os_str().is_empty() {
            return Err(WalkerError::config_error(format!(
                "Invalid empty output_file in config file: {}",
                path.display()
            )));
        }
    }

    Ok(())
}

/// Candidate default config locations, in lookup order
pub fn default_config_locations() -> Vec<PathBuf> {
    let mut locations = vec![PathBuf::from(DEFAULT_CONFIG_FILE)];

    if let Some(home_dir) = dirs::home_dir() {
        locations.push(home_dir.join(DEFAULT_CONFIG_FILE));
    }

    if let Some(config_dir) = dirs::config_dir() {
        locations.push(config_dir.join("dts-walker").join("config.toml"));
    }

    locations
}

/// Find and load configuration from the first default location that exists
pub fn find_default_config() -> Result<Option<PartialSettings>> {
    for location in default_config_locations() {
        if location.is_file() {
            return Ok(Some(parse_config_file(location)?));
        }
    }
    Ok(None)
}

/// Create a default configuration file at the specified path
pub fn create_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).with_path(parent)?;
        }
    }

    let default_config = include_str!("default_config.toml");
    fs::write(path, default_config).with_path(path)?;

    Ok(())
}
