//! CLI argument definitions.
//!
//! One clap-derived struct per binary: [`HealthCli`] and [`MprisCli`].

use clap::Parser;
use std::path::PathBuf;

use crate::config::StatusConfig;
use crate::mpris::NotifierSettings;

/// Check that the commands and fonts this desktop setup uses are installed.
///
/// Never installs anything and always exits successfully.
#[derive(Debug, Parser)]
#[command(name = "health")]
#[command(author, version, long_about = None)]
pub struct HealthCli {
    /// Path to config file (overrides ~/.config/dotscripts/config.yml)
    #[arg(short, long, env = "DOTSCRIPTS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Read the OS identity from this file instead of /etc/os-release
    #[arg(long, hide = true, env = "DOTSCRIPTS_OS_RELEASE")]
    pub os_release: Option<PathBuf>,
}

/// Print a clickable now-playing line for polybar on every player change.
#[derive(Debug, Parser)]
#[command(name = "polybar-mpris")]
#[command(author, version, long_about = None)]
pub struct MprisCli {
    /// Path to config file (overrides ~/.config/dotscripts/config.yml)
    #[arg(short, long, env = "DOTSCRIPTS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Well-known bus name of the player
    #[arg(short, long)]
    pub player: Option<String>,

    /// Maximum title length before it is cut with `...`
    #[arg(short = 'n', long)]
    pub max_title_len: Option<usize>,

    /// Print the player's properties as JSON to stderr on every update
    #[arg(long)]
    pub dump: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl MprisCli {
    /// Config values with command-line overrides applied.
    pub fn settings(&self, config: &StatusConfig) -> NotifierSettings {
        let mut settings = NotifierSettings::from(config);
        if let Some(player) = &self.player {
            settings.player = player.clone();
        }
        if let Some(max) = self.max_title_len {
            settings.max_title_len = max;
        }
        settings.dump = self.dump;
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn health_cli_is_valid() {
        HealthCli::command().debug_assert();
    }

    #[test]
    fn mpris_cli_is_valid() {
        MprisCli::command().debug_assert();
    }

    #[test]
    fn about_comes_from_each_binary() {
        let health = HealthCli::command().get_about().map(|a| a.to_string());
        let mpris = MprisCli::command().get_about().map(|a| a.to_string());
        assert!(health.unwrap_or_default().contains("commands and fonts"));
        assert!(mpris.unwrap_or_default().contains("now-playing line"));
    }

    #[test]
    fn health_takes_no_required_args() {
        let cli = HealthCli::try_parse_from(["health"]).unwrap();
        assert!(!cli.no_color);
        assert!(!cli.debug);
    }

    #[test]
    fn mpris_flags_override_config() {
        let cli = MprisCli::try_parse_from([
            "polybar-mpris",
            "--player",
            "org.mpris.MediaPlayer2.spotify",
            "-n",
            "20",
            "--dump",
        ])
        .unwrap();
        let settings = cli.settings(&StatusConfig::default());
        assert_eq!(settings.player, "org.mpris.MediaPlayer2.spotify");
        assert_eq!(settings.max_title_len, 20);
        assert!(settings.dump);
    }

    #[test]
    fn mpris_defaults_come_from_config() {
        let cli = MprisCli::try_parse_from(["polybar-mpris"]).unwrap();
        let config = StatusConfig {
            max_title_len: 42,
            player: "org.mpris.MediaPlayer2.mpv".to_string(),
        };
        let settings = cli.settings(&config);
        assert_eq!(settings.player, "org.mpris.MediaPlayer2.mpv");
        assert_eq!(settings.max_title_len, 42);
        assert!(!settings.dump);
    }
}
