//! Configuration loading and validation.
//!
//! Both tools read the same optional YAML file:
//! - Schema definitions in [`schema`]
//! - File discovery, loading, and validation in [`loader`]
//!
//! # Example
//!
//! ```
//! use dotscripts::config::load_config;
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("config.yml");
//! fs::write(&path, "status:\n  max_title_len: 24\n").unwrap();
//!
//! let config = load_config(Some(&path)).unwrap();
//! assert_eq!(config.status.max_title_len, 24);
//! ```
//!
//! # Configuration File Location
//!
//! `--config <path>` if given, otherwise `$XDG_CONFIG_HOME/dotscripts/config.yml`
//! when it exists. With neither, built-in defaults apply.

pub mod loader;
pub mod schema;

pub use loader::{
    default_config_path, load_config, load_config_file, parse_config, validate,
    validate_max_title_len,
};
pub use schema::{
    CustomRequirement, DotConfig, HealthConfig, StatusConfig, DEFAULT_MAX_TITLE_LEN,
    MIN_MAX_TITLE_LEN,
};
