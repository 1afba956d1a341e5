//! Proxy for the properties interface of an MPRIS player object.
//!
//! Only the two members the widget uses are declared: `GetAll` for the
//! initial snapshot and the `PropertiesChanged` signal for updates.
//!
//! For more information, see ["Writing a client proxy" in the zbus
//! tutorial](https://dbus2.github.io/zbus/).

use std::collections::HashMap;
use zbus::proxy;
use zbus::zvariant::{OwnedValue, Value};

#[proxy(
    interface = "org.freedesktop.DBus.Properties",
    default_service = "org.mpris.MediaPlayer2.playerctld",
    default_path = "/org/mpris/MediaPlayer2",
    gen_async = false,
    blocking_name = "PlayerPropertiesProxy"
)]
pub trait PlayerProperties {
    /// GetAll method
    fn get_all(&self, interface_name: &str) -> zbus::Result<HashMap<String, OwnedValue>>;

    /// PropertiesChanged signal
    #[zbus(signal)]
    fn properties_changed(
        &self,
        interface_name: &str,
        changed_properties: HashMap<&str, Value<'_>>,
        invalidated_properties: Vec<&str>,
    ) -> zbus::Result<()>;
}
