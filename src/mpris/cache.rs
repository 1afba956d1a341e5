//! Last-known player properties.
//!
//! The cache starts from a full `GetAll` snapshot and is only ever merged
//! into afterwards, so it always holds the union of the snapshot and every
//! partial update since.

use std::collections::BTreeMap;

use crate::error::{DotError, Result};
use crate::mpris::names::{metadata, props};
use crate::mpris::value::PropertyValue;

/// Playback state as reported by `PlaybackStatus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Paused,
    /// Anything other than `Paused`, including `Stopped`.
    Playing,
}

impl PlaybackState {
    /// Classify a `PlaybackStatus` string.
    pub fn from_status(status: &str) -> Self {
        if status == "Paused" {
            PlaybackState::Paused
        } else {
            PlaybackState::Playing
        }
    }
}

/// Property name to last-known value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyCache {
    props: BTreeMap<String, PropertyValue>,
}

impl PropertyCache {
    /// Build the cache from a full property snapshot.
    pub fn from_snapshot<I>(snapshot: I) -> Self
    where
        I: IntoIterator<Item = (String, PropertyValue)>,
    {
        Self {
            props: snapshot.into_iter().collect(),
        }
    }

    /// Merge a partial update. Keys not in the update are left alone.
    pub fn merge<I>(&mut self, changed: I)
    where
        I: IntoIterator<Item = (String, PropertyValue)>,
    {
        for (name, value) in changed {
            self.props.insert(name, value);
        }
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.props.get(name)
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// The raw property map, for dumping.
    pub fn properties(&self) -> &BTreeMap<String, PropertyValue> {
        &self.props
    }

    /// `PlaybackStatus`, which every MPRIS player must report.
    pub fn playback_state(&self) -> Result<PlaybackState> {
        self.get(props::PLAYBACK_STATUS)
            .and_then(PropertyValue::as_str)
            .map(PlaybackState::from_status)
            .ok_or_else(|| DotError::MissingProperty {
                property: props::PLAYBACK_STATUS.to_string(),
            })
    }

    /// `xesam:title` from `Metadata`.
    ///
    /// `Metadata` itself is required; a track without a title gives `None`.
    pub fn title(&self) -> Result<Option<&str>> {
        let meta = self
            .get(props::METADATA)
            .and_then(PropertyValue::as_map)
            .ok_or_else(|| DotError::MissingProperty {
                property: props::METADATA.to_string(),
            })?;
        Ok(meta.get(metadata::TITLE).and_then(PropertyValue::as_str))
    }
}
