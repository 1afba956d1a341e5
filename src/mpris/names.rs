//! Fully-qualified D-Bus names used by the widget.

/// Root MPRIS interface; players register as `org.mpris.MediaPlayer2.<name>`.
pub const MEDIA_PLAYER2: &str = "org.mpris.MediaPlayer2";

/// Player control interface on the MPRIS object.
pub const PLAYER_INTERFACE: &str = "org.mpris.MediaPlayer2.Player";

/// Standard properties interface.
pub const PROPERTIES_INTERFACE: &str = "org.freedesktop.DBus.Properties";

/// playerctld proxies whichever player was active last.
pub const PLAYERCTLD_BUS: &str = "org.mpris.MediaPlayer2.playerctld";

/// Object path every MPRIS player exposes.
pub const PLAYER_OBJECT: &str = "/org/mpris/MediaPlayer2";

/// Player property names.
pub mod props {
    pub const PLAYBACK_STATUS: &str = "PlaybackStatus";
    pub const METADATA: &str = "Metadata";
}

/// Metadata keys.
pub mod metadata {
    pub const TITLE: &str = "xesam:title";
}
