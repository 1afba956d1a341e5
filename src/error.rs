//! Error types for dotscripts.
//!
//! This module defines [`DotError`], the error type shared by both tools,
//! and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - The dependency checker never surfaces errors: lookup failures mean "absent"
//! - Config problems are reported with the offending path or field
//! - Bus and player errors are fatal for the status widget and bubble up to `main`

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for dotscripts operations.
#[derive(Debug, Error)]
pub enum DotError {
    /// Config file given on the command line does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// The player did not report a property the status line needs.
    #[error("Player property '{property}' is missing or has the wrong type")]
    MissingProperty { property: String },

    /// The property change stream ended.
    #[error("Signal stream from {service} closed")]
    SignalStreamClosed { service: String },

    /// Session bus error.
    #[error("D-Bus error: {0}")]
    Bus(#[from] zbus::Error),

    /// Error returned by a standard D-Bus interface call.
    #[error("D-Bus call failed: {0}")]
    Fdo(#[from] zbus::fdo::Error),

    /// Malformed bus, interface, or member name.
    #[error("Invalid D-Bus name: {0}")]
    Name(#[from] zbus::names::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for dotscripts operations.
pub type Result<T> = std::result::Result<T, DotError>;
