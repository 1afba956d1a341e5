//! Requirement registry and definitions.
//!
//! Defines what the dotfiles setup needs, how to look for it, and which
//! package provides it. The registry holds the built-in requirements plus any
//! extra commands and fonts from the user's config, in check order.

use crate::config::{CustomRequirement, HealthConfig};
use crate::environment::Distro;

/// How to check if a requirement is met.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequirementKind {
    /// An executable that must be found on `PATH`.
    Command,
    /// A font family that must be known to fontconfig.
    Font,
}

/// A package manager that can provide a requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallMethod {
    /// Official Arch repositories.
    Pacman,
    /// Arch User Repository, installed through `yay`.
    Aur,
}

impl InstallMethod {
    /// Shell command that installs `package` with this method.
    pub fn command(self, package: &str) -> String {
        match self {
            InstallMethod::Pacman => format!("sudo pacman -S {}", package),
            InstallMethod::Aur => format!("yay -S {}", package),
        }
    }
}

/// Install suggestion for a missing requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallHint {
    pub method: InstallMethod,
    pub package: String,
}

impl InstallHint {
    /// The full install command, e.g. `sudo pacman -S feh`.
    pub fn command(&self) -> String {
        self.method.command(&self.package)
    }
}

/// A requirement definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    /// Command or font family name.
    pub name: String,
    pub kind: RequirementKind,
    /// Package in the official repositories.
    pub pacman: Option<String>,
    /// Package in the AUR.
    pub aur: Option<String>,
    /// Commands that must be present before this can be checked.
    pub depends_on: Vec<String>,
}

impl Requirement {
    /// A command looked up on `PATH`.
    pub fn command(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: RequirementKind::Command,
            pacman: None,
            aur: None,
            depends_on: Vec::new(),
        }
    }

    /// A font family; checking it needs `fc-list`.
    pub fn font(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: RequirementKind::Font,
            pacman: None,
            aur: None,
            depends_on: vec!["fc-list".to_string()],
        }
    }

    /// Set the official repository package.
    pub fn pacman(mut self, package: &str) -> Self {
        self.pacman = Some(package.to_string());
        self
    }

    /// Set the AUR package.
    pub fn aur(mut self, package: &str) -> Self {
        self.aur = Some(package.to_string());
        self
    }

    /// Display label used in report lines.
    pub fn label(&self) -> String {
        match self.kind {
            RequirementKind::Command => self.name.clone(),
            RequirementKind::Font => format!("font '{}'", self.name),
        }
    }

    /// Pick an install hint for the given distro.
    ///
    /// Only Arch has hints; an official package wins over an AUR one.
    pub fn install_hint(&self, distro: Distro) -> Option<InstallHint> {
        if distro != Distro::Arch {
            return None;
        }
        if let Some(package) = &self.pacman {
            return Some(InstallHint {
                method: InstallMethod::Pacman,
                package: package.clone(),
            });
        }
        self.aur.as_ref().map(|package| InstallHint {
            method: InstallMethod::Aur,
            package: package.clone(),
        })
    }

    fn from_custom(kind: RequirementKind, custom: &CustomRequirement) -> Self {
        let mut req = match kind {
            RequirementKind::Command => Self::command(&custom.name),
            RequirementKind::Font => Self::font(&custom.name),
        };
        req.pacman = custom.pacman.clone();
        req.aur = custom.aur.clone();
        req
    }
}

/// Ordered list of all known requirements.
#[derive(Debug, Clone)]
pub struct RequirementRegistry {
    requirements: Vec<Requirement>,
}

impl Default for RequirementRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RequirementRegistry {
    /// Create a registry with the built-in requirements.
    pub fn new() -> Self {
        Self {
            requirements: builtin_requirements(),
        }
    }

    /// Create an empty registry.
    pub fn empty() -> Self {
        Self {
            requirements: Vec::new(),
        }
    }

    /// Built-ins followed by the extra commands and fonts from config.
    pub fn with_config(config: &HealthConfig) -> Self {
        let mut registry = Self::new();
        for custom in &config.commands {
            registry.push(Requirement::from_custom(RequirementKind::Command, custom));
        }
        for custom in &config.fonts {
            registry.push(Requirement::from_custom(RequirementKind::Font, custom));
        }
        registry
    }

    /// Append a requirement, replacing an existing one of the same name and kind.
    pub fn push(&mut self, requirement: Requirement) {
        if let Some(existing) = self
            .requirements
            .iter_mut()
            .find(|r| r.name == requirement.name && r.kind == requirement.kind)
        {
            *existing = requirement;
        } else {
            self.requirements.push(requirement);
        }
    }

    /// Look up a requirement by name.
    pub fn get(&self, name: &str) -> Option<&Requirement> {
        self.requirements.iter().find(|r| r.name == name)
    }

    /// All requirements in check order.
    pub fn iter(&self) -> impl Iterator<Item = &Requirement> {
        self.requirements.iter()
    }

    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }
}

/// The requirements of the window-manager setup.
///
/// `fc-list` comes before the font since the font check runs it.
pub fn builtin_requirements() -> Vec<Requirement> {
    vec![
        Requirement::command("i3lockr").aur("i3lockr-bin"),
        Requirement::command("dunst").pacman("dunst"),
        Requirement::command("rofi").pacman("rofi"),
        Requirement::command("playerctl").pacman("playerctl"),
        Requirement::command("pactl").pacman("libpulse"),
        Requirement::command("nm-applet").pacman("network-manager-applet"),
        Requirement::command("xss-lock").pacman("xss-lock"),
        Requirement::command("picom").pacman("picom"),
        Requirement::command("feh").pacman("feh"),
        Requirement::command("xsetroot").pacman("xorg-xsetroot"),
        Requirement::command("polybar").pacman("polybar"),
        Requirement::command("flameshot").pacman("flameshot"),
        Requirement::command("lowbattery").aur("low-battery-warning-git"),
        Requirement::command("fc-list").pacman("fontconfig"),
        Requirement::font("SauceCodePro Nerd Font").pacman("ttf-sourcecodepro-nerd"),
    ]
}
