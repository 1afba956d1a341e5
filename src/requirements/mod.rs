//! Requirement detection and gap checking.
//!
//! This module checks whether the commands and fonts the desktop setup
//! relies on are installed, and suggests how to install missing ones.
//!
//! # Modules
//!
//! - [`registry`] - Requirement definitions and install metadata
//! - [`probe`] - PATH and fontconfig lookups
//! - [`checker`] - Gap checker producing a status per requirement
//! - [`status`] - Requirement status types

pub mod checker;
pub mod probe;
pub mod registry;
pub mod status;

pub use checker::GapChecker;
pub use probe::SystemProbe;
pub use registry::{
    builtin_requirements, InstallHint, InstallMethod, Requirement, RequirementKind,
    RequirementRegistry,
};
pub use status::{CheckResult, CheckSummary, RequirementStatus};
