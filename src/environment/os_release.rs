//! OS identity detection from `/etc/os-release`.
//!
//! The identity is read once at startup and handed to whatever needs it.
//! A missing or unreadable file is not an error; it just yields an empty
//! identity, which in turn means no distro-specific install hints.

use std::collections::BTreeMap;
use std::path::Path;

/// Default location of the os-release file.
pub const OS_RELEASE_PATH: &str = "/etc/os-release";

/// Linux distribution families we know how to give install hints for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distro {
    /// Arch Linux and derivatives (`ID=arch` or `ID_LIKE` containing `arch`).
    Arch,
    /// Any other identified distribution.
    Other,
    /// No `ID` key available.
    Unknown,
}

/// Key/value pairs parsed from an os-release style file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OsIdentity {
    fields: BTreeMap<String, String>,
}

impl OsIdentity {
    /// Load the identity from an arbitrary path, empty if unreadable.
    pub fn from_path(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(e) => {
                tracing::debug!("Could not read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse os-release content.
    ///
    /// Blank lines, comments, and lines without `=` are skipped. Values may be
    /// wrapped in single or double quotes.
    pub fn parse(content: &str) -> Self {
        let mut fields = BTreeMap::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            fields.insert(key.trim().to_string(), unquote(value.trim()).to_string());
        }
        Self { fields }
    }

    /// Look up a field such as `ID` or `PRETTY_NAME`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Whether no fields were found.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Classify the distribution.
    pub fn distro(&self) -> Distro {
        let Some(id) = self.get("ID") else {
            return Distro::Unknown;
        };
        let like_arch = self
            .get("ID_LIKE")
            .is_some_and(|like| like.split_whitespace().any(|l| l == "arch"));
        if id == "arch" || like_arch {
            Distro::Arch
        } else {
            Distro::Other
        }
    }
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}
