use guestcap_core::{CapabilityBinding, GuestRegistry, Result};

use crate::plugin::GuestPlugin;

/// Guest type identifier registered for LibreELEC.
pub const GUEST_NAME: &str = "libreelec";

/// Guest type LibreELEC specializes. Capabilities not bound by this plugin
/// are inherited from it.
pub const PARENT_GUEST_NAME: &str = "linux";

/// Matched against the `ID` variable in the guest's `/etc/os-release` by the
/// host tool's guest detection.
pub const GUEST_DETECTION_NAME: &str = "libreelec";

/// Well-known capability names used by this plugin.
pub mod caps {
    /// Sets the guest's hostname.
    pub const CHANGE_HOST_NAME: &str = "change_host_name";

    /// Writes shared-folder mounts to the guest's `/etc/fstab`.
    pub const PERSIST_MOUNT_SHARED_FOLDER: &str = "persist_mount_shared_folder";
}

/// Guest support for LibreELEC, a Linux-based embedded media-center
/// distribution.
///
/// LibreELEC behaves like any other Linux guest except for two things:
/// hostname changes go through the same handler Debian guests use, and
/// `/etc/fstab` must never be written because it lives on the read-only
/// squashfs partition. The latter is an explicit disablement rather than an
/// unbound capability, so resolution never falls back to the generic Linux
/// persist behavior.
pub struct LibreElecPlugin<H> {
    change_host_name: H,
}

impl<H> LibreElecPlugin<H> {
    /// `change_host_name` is the handler to delegate hostname changes to,
    /// typically the same implementation the Debian guest registers. Any
    /// registered implementation may be referenced.
    pub fn new(change_host_name: H) -> Self {
        Self { change_host_name }
    }
}

impl<H: Clone> GuestPlugin<H> for LibreElecPlugin<H> {
    fn name(&self) -> &str {
        "LibreELEC guest"
    }

    fn description(&self) -> &str {
        "LibreELEC guest support"
    }

    fn register(&self, registry: &mut GuestRegistry<H>) -> Result<()> {
        registry.register_guest_with_detection(
            GUEST_NAME,
            Some(PARENT_GUEST_NAME),
            Some(GUEST_DETECTION_NAME),
        )?;
        registry.bind_capability(
            GUEST_NAME,
            caps::CHANGE_HOST_NAME,
            CapabilityBinding::Implementation(self.change_host_name.clone()),
        )?;
        registry.disable_capability(GUEST_NAME, caps::PERSIST_MOUNT_SHARED_FOLDER)?;
        Ok(())
    }
}
