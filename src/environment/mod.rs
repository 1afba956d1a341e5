//! Host environment detection.
//!
//! Currently this is just the OS identity from `/etc/os-release`, which
//! decides which install hints the dependency checker can offer.

pub mod os_release;

pub use os_release::{Distro, OsIdentity, OS_RELEASE_PATH};
