//! Guest-type and capability registration for VM provisioning tools.
//!
//! A provisioning tool drives guest automation (changing hostnames,
//! persisting mounts, ...) through named capabilities resolved per guest
//! operating system. This crate provides the registry mapping
//! (guest type, capability) pairs to handlers, with fallback across a
//! guest-type hierarchy, plus the LibreELEC guest plugin built on it.
//!
//! # Quick Start
//!
//! ```rust
//! use guestcap::{GuestPlugin, GuestRegistry, LibreElecPlugin, libreelec};
//!
//! # fn example() -> guestcap::Result<()> {
//! let mut registry: GuestRegistry<&str> = GuestRegistry::new();
//! registry.register_guest("linux", None)?;
//!
//! LibreElecPlugin::new("debian-change-host-name").register(&mut registry)?;
//!
//! let hostname = registry.resolve("libreelec", libreelec::caps::CHANGE_HOST_NAME)?;
//! assert_eq!(hostname.implementation(), Some(&"debian-change-host-name"));
//!
//! let persist = registry.resolve("libreelec", libreelec::caps::PERSIST_MOUNT_SHARED_FOLDER)?;
//! assert!(persist.is_disabled());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod libreelec;
mod plugin;

pub use libreelec::LibreElecPlugin;
pub use plugin::{GuestPlugin, register_plugins};

// Registry and data model
pub use guestcap_core::{
    CapabilityBinding, CapabilityName, GuestRegistry, GuestType, GuestTypeId, Resolved,
};

// Errors
pub use guestcap_core::{Error, Result};
