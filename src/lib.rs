//! dotscripts - helpers for a window-manager dotfiles setup.
//!
//! Two binaries share this library:
//!
//! - `health` checks that the commands and fonts the setup relies on are
//!   installed and suggests how to install missing ones
//! - `polybar-mpris` prints a clickable now-playing line for polybar and
//!   updates it whenever the MPRIS player's properties change
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and validation
//! - [`environment`] - OS identity detection
//! - [`error`] - Error types and result aliases
//! - [`logging`] - Tracing setup
//! - [`mpris`] - Now-playing widget over the session bus
//! - [`requirements`] - Requirement definitions and gap checking
//! - [`ui`] - Terminal theme and report output
//!
//! # Example
//!
//! ```
//! use dotscripts::mpris::truncate;
//!
//! assert_eq!(truncate("Bohemian Rhapsody", 10), "Bohemia...");
//! assert_eq!(truncate("Song A", 10), "Song A");
//! ```

pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod logging;
pub mod mpris;
pub mod requirements;
pub mod ui;

pub use error::{DotError, Result};
