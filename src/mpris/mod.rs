//! Polybar now-playing widget backed by MPRIS.
//!
//! # Modules
//!
//! - [`names`] - Bus, object, and interface names
//! - [`proxy`] - zbus proxy for the player's properties interface
//! - [`value`] - Bus-independent property values
//! - [`cache`] - Last-known player properties
//! - [`render`] - Status line and click-action markup
//! - [`notifier`] - Connection start-up and the signal loop
//!
//! # Example
//!
//! ```
//! use dotscripts::mpris::{PropertyCache, PropertyValue, StatusRenderer};
//! use std::collections::BTreeMap;
//!
//! let mut metadata = BTreeMap::new();
//! metadata.insert("xesam:title".to_string(), PropertyValue::from("Song A"));
//! let cache = PropertyCache::from_snapshot([
//!     ("PlaybackStatus".to_string(), PropertyValue::from("Playing")),
//!     ("Metadata".to_string(), PropertyValue::Map(metadata)),
//! ]);
//!
//! let line = StatusRenderer::new(30).render(&cache).unwrap();
//! assert!(line.starts_with("Song A%{A1:playerctl previous:}"));
//! ```

pub mod cache;
pub mod names;
pub mod notifier;
pub mod proxy;
pub mod render;
pub mod value;

pub use cache::{PlaybackState, PropertyCache};
pub use notifier::{MprisNotifier, NotifierSettings, StatusWriter};
pub use render::{clickable, truncate, StatusRenderer};
pub use value::PropertyValue;
