//! Now-playing notifier: bus connection, property cache, and event loop.
//!
//! The notifier is either not started yet or active. [`MprisNotifier::connect`]
//! does the whole start-up (session bus, proxy, signal subscription, then `GetAll`)
//! and returns an active notifier; [`MprisNotifier::run`] prints the first
//! line and then one line per property change until the process is killed.
//!
//! Every failure is fatal. There is no reconnect logic: polybar restarts the
//! module when it exits.

use std::io::{self, Write};

use zbus::blocking::Connection;
use zbus::names::BusName;

use crate::config::StatusConfig;
use crate::error::{DotError, Result};
use crate::mpris::cache::PropertyCache;
use crate::mpris::names::{PLAYER_INTERFACE, PLAYER_OBJECT, PROPERTIES_INTERFACE};
use crate::mpris::proxy::{PlayerPropertiesProxy, PropertiesChangedIterator};
use crate::mpris::render::StatusRenderer;
use crate::mpris::value::PropertyValue;

/// Runtime settings for the notifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifierSettings {
    /// Well-known bus name of the player.
    pub player: String,
    pub max_title_len: usize,
    /// Print the property cache as JSON to stderr before each render.
    pub dump: bool,
}

impl From<&StatusConfig> for NotifierSettings {
    fn from(config: &StatusConfig) -> Self {
        Self {
            player: config.player.clone(),
            max_title_len: config.max_title_len,
            dump: false,
        }
    }
}

/// Renders the cache and writes status lines.
///
/// This is the part of the notifier that doesn't touch the bus.
pub struct StatusWriter<W: Write> {
    cache: PropertyCache,
    renderer: StatusRenderer,
    out: W,
    dump: bool,
}

impl<W: Write> StatusWriter<W> {
    pub fn new(cache: PropertyCache, renderer: StatusRenderer, out: W) -> Self {
        Self {
            cache,
            renderer,
            out,
            dump: false,
        }
    }

    /// Dump the cache as JSON to stderr before each line.
    pub fn with_dump(mut self, dump: bool) -> Self {
        self.dump = dump;
        self
    }

    pub fn cache(&self) -> &PropertyCache {
        &self.cache
    }

    /// Merge a partial update into the cache.
    pub fn apply<I>(&mut self, changed: I)
    where
        I: IntoIterator<Item = (String, PropertyValue)>,
    {
        self.cache.merge(changed);
    }

    /// Render the current cache and write it as one flushed line.
    pub fn emit(&mut self) -> Result<()> {
        if self.dump {
            let json = serde_json::to_string_pretty(self.cache.properties())
                .map_err(anyhow::Error::from)?;
            eprintln!("{}", json);
        }
        let line = self.renderer.render(&self.cache)?;
        writeln!(self.out, "{}", line)?;
        self.out.flush()?;
        Ok(())
    }

    /// Merge an update and write the new line.
    pub fn update<I>(&mut self, changed: I) -> Result<()>
    where
        I: IntoIterator<Item = (String, PropertyValue)>,
    {
        self.apply(changed);
        self.emit()
    }

    /// Handle one `PropertiesChanged` notification.
    ///
    /// Changes on interfaces other than the player's are ignored. Returns
    /// whether a line was written.
    pub fn on_properties_changed<I>(&mut self, interface: &str, changed: I) -> Result<bool>
    where
        I: IntoIterator<Item = (String, PropertyValue)>,
    {
        if interface != PLAYER_INTERFACE {
            tracing::debug!("Ignoring change on {}", interface);
            return Ok(false);
        }

        let changed: Vec<(String, PropertyValue)> = changed.into_iter().collect();
        tracing::debug!(
            "Properties changed: {}",
            changed
                .iter()
                .map(|(name, _)| name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
        self.update(changed)?;
        Ok(true)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// An active notifier connected to a player.
pub struct MprisNotifier<W: Write> {
    signals: PropertiesChangedIterator,
    writer: StatusWriter<W>,
    player: String,
}

impl MprisNotifier<io::Stdout> {
    /// Connect and write status lines to stdout.
    pub fn connect_stdout(settings: &NotifierSettings) -> Result<Self> {
        Self::connect(settings, io::stdout())
    }
}

impl<W: Write> MprisNotifier<W> {
    /// Connect to the session bus and fetch the initial property snapshot.
    pub fn connect(settings: &NotifierSettings, out: W) -> Result<Self> {
        let connection = Connection::session()?;
        tracing::info!("Connected to D-Bus session bus");
        Self::with_connection(&connection, settings, out)
    }

    /// Subscribe to changes and fetch the snapshot over an existing connection.
    ///
    /// The subscription is in place before `GetAll`, so a change racing the
    /// snapshot is still delivered by [`run`](Self::run).
    pub fn with_connection(
        connection: &Connection,
        settings: &NotifierSettings,
        out: W,
    ) -> Result<Self> {
        let destination: BusName<'static> = BusName::try_from(settings.player.as_str())?.to_owned();
        let proxy = PlayerPropertiesProxy::builder(connection)
            .destination(destination)?
            .path(PLAYER_OBJECT)?
            .build()?;

        let signals = proxy.receive_properties_changed()?;

        tracing::debug!(
            "Fetching {} via {}.GetAll on {}",
            PLAYER_INTERFACE,
            PROPERTIES_INTERFACE,
            settings.player
        );
        let snapshot = proxy.get_all(PLAYER_INTERFACE)?;
        let cache = PropertyCache::from_snapshot(
            snapshot
                .iter()
                .map(|(name, value)| (name.clone(), PropertyValue::from(&**value))),
        );
        tracing::debug!("Initial snapshot has {} properties", cache.len());

        let renderer = StatusRenderer::new(settings.max_title_len);
        Ok(Self {
            signals,
            writer: StatusWriter::new(cache, renderer, out).with_dump(settings.dump),
            player: settings.player.clone(),
        })
    }

    pub fn cache(&self) -> &PropertyCache {
        self.writer.cache()
    }

    /// Print the initial line, then re-render on every property change.
    ///
    /// Only returns on error.
    pub fn run(mut self) -> Result<()> {
        self.writer.emit()?;

        for signal in self.signals {
            let args = signal.args()?;
            let changed = args
                .changed_properties()
                .iter()
                .map(|(name, value)| (name.to_string(), PropertyValue::from(value)));
            self.writer
                .on_properties_changed(args.interface_name(), changed)?;
        }

        Err(DotError::SignalStreamClosed {
            service: self.player,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mpris::cache::PlaybackState;
    use crate::mpris::render::{PAUSE_GLYPH, PLAY_GLYPH};
    use std::collections::{BTreeMap, HashMap};
    use zbus::zvariant::Value;

    fn snapshot(status: &str, title: &str) -> PropertyCache {
        let mut metadata = BTreeMap::new();
        metadata.insert("xesam:title".to_string(), PropertyValue::from(title));
        PropertyCache::from_snapshot([
            ("PlaybackStatus".to_string(), PropertyValue::from(status)),
            ("Metadata".to_string(), PropertyValue::Map(metadata)),
        ])
    }

    fn lines(writer: StatusWriter<Vec<u8>>) -> Vec<String> {
        String::from_utf8(writer.into_inner())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn settings_from_config() {
        let settings = NotifierSettings::from(&StatusConfig::default());
        assert_eq!(settings.player, "org.mpris.MediaPlayer2.playerctld");
        assert_eq!(settings.max_title_len, 30);
        assert!(!settings.dump);
    }

    #[test]
    fn emits_one_line_per_render() {
        let mut writer = StatusWriter::new(
            snapshot("Playing", "Song A"),
            StatusRenderer::new(30),
            Vec::new(),
        );
        writer.emit().unwrap();
        writer
            .update([("PlaybackStatus".to_string(), PropertyValue::from("Paused"))])
            .unwrap();

        let lines = lines(writer);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Song A"));
        assert!(lines[0].contains(PAUSE_GLYPH));
        assert!(!lines[0].contains(PLAY_GLYPH));
        assert!(lines[1].contains("Song A"));
        assert!(lines[1].contains(PLAY_GLYPH));
        assert!(!lines[1].contains(PAUSE_GLYPH));
    }

    #[test]
    fn new_track_replaces_title() {
        let mut writer = StatusWriter::new(
            snapshot("Playing", "Song A"),
            StatusRenderer::new(30),
            Vec::new(),
        );
        let mut metadata = BTreeMap::new();
        metadata.insert("xesam:title".to_string(), PropertyValue::from("Song B"));
        writer
            .update([("Metadata".to_string(), PropertyValue::Map(metadata))])
            .unwrap();

        let lines = lines(writer);
        assert!(lines[0].starts_with("Song B"));
    }

    #[test]
    fn ignores_changes_on_other_interfaces() {
        let mut writer = StatusWriter::new(
            snapshot("Playing", "Song A"),
            StatusRenderer::new(30),
            Vec::new(),
        );
        let written = writer
            .on_properties_changed(
                "org.mpris.MediaPlayer2",
                [("PlaybackStatus".to_string(), PropertyValue::from("Paused"))],
            )
            .unwrap();

        assert!(!written);
        assert_eq!(
            writer.cache().playback_state().unwrap(),
            PlaybackState::Playing
        );
        assert!(writer.into_inner().is_empty());
    }

    #[test]
    fn player_changes_render_a_line() {
        let mut writer = StatusWriter::new(
            snapshot("Playing", "Song A"),
            StatusRenderer::new(30),
            Vec::new(),
        );
        let written = writer
            .on_properties_changed(
                PLAYER_INTERFACE,
                [("PlaybackStatus".to_string(), PropertyValue::from("Paused"))],
            )
            .unwrap();

        assert!(written);
        let lines = lines(writer);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Song A"));
        assert!(lines[0].contains(PLAY_GLYPH));
    }

    #[test]
    fn converted_metadata_signal_updates_title() {
        let mut writer = StatusWriter::new(
            snapshot("Paused", "Song A"),
            StatusRenderer::new(30),
            Vec::new(),
        );
        let mut metadata = HashMap::new();
        metadata.insert("xesam:title", Value::from("A much longer song title than fits"));
        metadata.insert("mpris:length", Value::from(215_000_000i64));
        let changed: HashMap<&str, Value<'_>> =
            HashMap::from([("Metadata", Value::from(metadata))]);

        writer
            .on_properties_changed(
                PLAYER_INTERFACE,
                changed
                    .iter()
                    .map(|(name, value)| (name.to_string(), PropertyValue::from(value))),
            )
            .unwrap();

        let lines = lines(writer);
        assert!(lines[0].starts_with("A much longer song title th..."));
    }

    #[test]
    fn emit_fails_on_incomplete_cache() {
        let mut writer = StatusWriter::new(
            PropertyCache::default(),
            StatusRenderer::new(30),
            Vec::new(),
        );
        assert!(matches!(
            writer.emit(),
            Err(DotError::MissingProperty { .. })
        ));
    }
}
