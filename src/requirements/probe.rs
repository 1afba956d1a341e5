//! System probe for locating commands and fonts.
//!
//! Commands are resolved by walking `PATH` entries directly instead of
//! shelling out to `which`, whose behavior varies between systems. Fonts are
//! resolved through fontconfig's `fc-list`, itself located on the same
//! search path.
//!
//! # Example
//!
//! ```no_run
//! use dotscripts::requirements::probe::SystemProbe;
//!
//! let probe = SystemProbe::run();
//! if let Some(path) = probe.find_command("polybar") {
//!     println!("polybar at {}", path.display());
//! }
//! ```

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Snapshot of the search path used for all lookups in one run.
#[derive(Debug, Clone, Default)]
pub struct SystemProbe {
    path_entries: Vec<PathBuf>,
}

impl SystemProbe {
    /// Probe using the process `PATH`.
    pub fn run() -> Self {
        Self::with_path(parse_system_path())
    }

    /// Probe using an explicit list of directories.
    pub fn with_path(path_entries: Vec<PathBuf>) -> Self {
        Self { path_entries }
    }

    /// The directories searched, in order.
    pub fn path_entries(&self) -> &[PathBuf] {
        &self.path_entries
    }

    /// Locate an executable by name.
    pub fn find_command(&self, tool: &str) -> Option<PathBuf> {
        resolve_tool_path(tool, &self.path_entries)
    }

    /// Whether fontconfig knows a font with exactly this family name.
    ///
    /// Any failure to run `fc-list` counts as "not installed".
    pub fn font_installed(&self, family: &str) -> bool {
        let Some(fc_list) = self.find_command("fc-list") else {
            tracing::debug!("fc-list not found, treating font '{}' as missing", family);
            return false;
        };

        let output = Command::new(&fc_list)
            .arg(family)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output();

        match output {
            Ok(out) => fc_list_has_family(&String::from_utf8_lossy(&out.stdout), family),
            Err(e) => {
                tracing::debug!("Failed to run {}: {}", fc_list.display(), e);
                false
            }
        }
    }
}

/// Check `fc-list` output for an exact family match.
///
/// Each line looks like `/path/to/font.ttf: Family Name,Alias:style=Regular`.
/// The family is the part of the second `": "` field before the first comma.
/// Lines that don't split into exactly two fields are ignored.
pub fn fc_list_has_family(output: &str, family: &str) -> bool {
    output.lines().any(|line| {
        let parts: Vec<&str> = line.split(": ").collect();
        if parts.len() != 2 {
            return false;
        }
        let name = parts[1].split(',').next().unwrap_or_default();
        name == family
    })
}

/// Check whether a path is executable.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that is an executable regular file.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(tool);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}
