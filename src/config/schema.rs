//! Configuration schema definitions.
//!
//! These structs map to the YAML configuration file format.

use serde::{Deserialize, Serialize};

use crate::mpris::names::PLAYERCTLD_BUS;

/// Default maximum title length for the status line.
pub const DEFAULT_MAX_TITLE_LEN: usize = 30;

/// Shortest title budget that still leaves room for the ellipsis.
pub const MIN_MAX_TITLE_LEN: usize = 4;

/// Root configuration structure for config.yml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DotConfig {
    /// Dependency checker settings
    pub health: HealthConfig,

    /// Status-bar widget settings
    pub status: StatusConfig,
}

/// Extra requirements for the dependency checker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthConfig {
    /// Commands appended to the built-in list
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub commands: Vec<CustomRequirement>,

    /// Font families appended to the built-in list
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fonts: Vec<CustomRequirement>,
}

/// A user-defined command or font requirement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomRequirement {
    /// Command or font family name
    pub name: String,

    /// Package in the official Arch repositories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pacman: Option<String>,

    /// Package in the AUR
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aur: Option<String>,
}

/// Now-playing widget settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    /// Titles longer than this are cut and end in `...`
    pub max_title_len: usize,

    /// Well-known bus name of the MPRIS player
    pub player: String,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            max_title_len: DEFAULT_MAX_TITLE_LEN,
            player: PLAYERCTLD_BUS.to_string(),
        }
    }
}
