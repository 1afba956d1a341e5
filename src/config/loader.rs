//! Configuration file discovery and loading.

use crate::config::schema::{DotConfig, MIN_MAX_TITLE_LEN};
use crate::error::{DotError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name under the user config dir.
pub const CONFIG_DIR_NAME: &str = "dotscripts";

/// File name of the config.
pub const CONFIG_FILE_NAME: &str = "config.yml";

/// Default config location: `$XDG_CONFIG_HOME/dotscripts/config.yml`.
pub fn default_config_path() -> Option<PathBuf> {
    Some(
        dirs::config_dir()?
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME),
    )
}

/// Load the config.
///
/// An explicit path must exist. Without one, the default location is used
/// if present and defaults otherwise.
pub fn load_config(explicit: Option<&Path>) -> Result<DotConfig> {
    let config = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(DotError::ConfigNotFound {
                    path: path.to_path_buf(),
                });
            }
            load_config_file(path)?
        }
        None => match default_config_path().filter(|p| p.exists()) {
            Some(path) => load_config_file(&path)?,
            None => {
                tracing::debug!("No config file found, using defaults");
                DotConfig::default()
            }
        },
    };

    validate(&config)?;
    Ok(config)
}

/// Load and parse a single config file.
pub fn load_config_file(path: &Path) -> Result<DotConfig> {
    tracing::debug!("Loading config from {}", path.display());
    let content = fs::read_to_string(path)?;
    parse_config(&content, path)
}

/// Parse config YAML; `path` is only used in error messages.
pub fn parse_config(content: &str, path: &Path) -> Result<DotConfig> {
    // An empty file deserializes to null, which means "all defaults".
    if content.trim().is_empty() {
        return Ok(DotConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| DotError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Check values serde can't.
///
/// `status.max_title_len` is left to [`validate_max_title_len`], which only
/// the status widget runs once command-line overrides are applied.
pub fn validate(config: &DotConfig) -> Result<()> {
    if config.status.player.trim().is_empty() {
        return Err(DotError::ConfigValidationError {
            message: "status.player must not be empty".to_string(),
        });
    }

    for req in config.health.commands.iter().chain(&config.health.fonts) {
        if req.name.trim().is_empty() {
            return Err(DotError::ConfigValidationError {
                message: "health requirement names must not be empty".to_string(),
            });
        }
    }

    Ok(())
}

/// The title budget must fit the `...` marker plus at least one character.
pub fn validate_max_title_len(max_title_len: usize) -> Result<()> {
    if max_title_len < MIN_MAX_TITLE_LEN {
        return Err(DotError::ConfigValidationError {
            message: format!(
                "max_title_len must be at least {}, got {}",
                MIN_MAX_TITLE_LEN, max_title_len
            ),
        });
    }
    Ok(())
}
