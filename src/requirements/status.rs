//! Requirement status types.
//!
//! Each requirement check produces a `RequirementStatus` describing whether
//! the command or font is available, and if not, how to get it.

use crate::requirements::registry::{InstallHint, RequirementKind};
use std::path::PathBuf;

/// The result of checking a single requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequirementStatus {
    /// Present. Commands carry their resolved path.
    Satisfied { path: Option<PathBuf> },

    /// Not installed.
    Missing {
        /// Install suggestion, only when the distro is known and a package is configured.
        hint: Option<InstallHint>,
    },

    /// Could not be checked because a prerequisite command is missing.
    Skipped { blocked_by: String },
}

impl RequirementStatus {
    /// Whether the requirement is satisfied.
    pub fn is_satisfied(&self) -> bool {
        matches!(self, RequirementStatus::Satisfied { .. })
    }
}

/// The result of checking one requirement.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Display label (`feh`, `font 'Hack'`).
    pub label: String,
    pub kind: RequirementKind,
    pub status: RequirementStatus,
}

/// Totals over a full check run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckSummary {
    pub satisfied: usize,
    pub missing: usize,
    pub skipped: usize,
}

impl CheckSummary {
    /// Tally a list of results.
    pub fn from_results(results: &[CheckResult]) -> Self {
        let mut summary = Self::default();
        for result in results {
            match result.status {
                RequirementStatus::Satisfied { .. } => summary.satisfied += 1,
                RequirementStatus::Missing { .. } => summary.missing += 1,
                RequirementStatus::Skipped { .. } => summary.skipped += 1,
            }
        }
        summary
    }
}
