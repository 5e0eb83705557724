use guestcap_core::{GuestRegistry, Result};

/// A unit of guest support loaded at startup.
///
/// Plugins declare guest types and capability bindings against a shared
/// registry. The host decides the order plugins run in; a plugin registered
/// later overrides earlier bindings for the same (guest, capability) pair.
pub trait GuestPlugin<H> {
    /// Human-readable plugin name (e.g. "LibreELEC guest").
    fn name(&self) -> &str;

    /// One-line description shown by the host tool.
    fn description(&self) -> &str {
        ""
    }

    /// Records this plugin's guest types and capability bindings.
    fn register(&self, registry: &mut GuestRegistry<H>) -> Result<()>;
}

/// Runs each plugin's registration in order. Errors abort immediately: a
/// failed registration means a misconfigured plugin set, not a recoverable
/// condition.
pub fn register_plugins<H>(
    registry: &mut GuestRegistry<H>,
    plugins: &[&dyn GuestPlugin<H>],
) -> Result<()> {
    for plugin in plugins {
        plugin.register(registry)?;
        tracing::info!(plugin = plugin.name(), "Guest plugin registered");
    }
    Ok(())
}
