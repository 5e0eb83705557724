use std::collections::{HashMap, HashSet};

use crate::error::{Error, Result};
use crate::types::{CapabilityBinding, CapabilityName, GuestType, GuestTypeId, Resolved};

/// Registry of guest types and their capability bindings.
///
/// `H` is the handler value bound to implemented capabilities; the registry
/// stores and returns handlers but never invokes them. Population happens
/// once at startup via [`register_guest`](Self::register_guest) and
/// [`bind_capability`](Self::bind_capability); after that,
/// [`resolve`](Self::resolve) is a pure read and safe to share across
/// threads.
#[derive(Debug)]
pub struct GuestRegistry<H> {
    guests: HashMap<GuestTypeId, GuestType>,
    bindings: HashMap<(GuestTypeId, CapabilityName), CapabilityBinding<H>>,
}

impl<H> GuestRegistry<H> {
    pub fn new() -> Self {
        Self {
            guests: HashMap::new(),
            bindings: HashMap::new(),
        }
    }

    /// Registers a guest type. `parent`, when given, must already be
    /// registered; resolution falls back to it for capabilities this type
    /// does not bind itself.
    pub fn register_guest(
        &mut self,
        id: impl Into<GuestTypeId>,
        parent: Option<&str>,
    ) -> Result<()> {
        self.register_guest_with_detection(id, parent, None)
    }

    /// Like [`register_guest`](Self::register_guest), additionally recording
    /// the identifier the host tool matches against the guest's
    /// `/etc/os-release` during OS detection.
    pub fn register_guest_with_detection(
        &mut self,
        id: impl Into<GuestTypeId>,
        parent: Option<&str>,
        detection_name: Option<&str>,
    ) -> Result<()> {
        let id = id.into();
        if self.guests.contains_key(&id) {
            return Err(Error::DuplicateGuest(id));
        }
        let parent = parent.map(GuestTypeId::from);
        if let Some(parent) = &parent {
            if !self.guests.contains_key(parent) {
                return Err(Error::UnknownParent(parent.clone()));
            }
        }
        tracing::debug!(
            guest = %id,
            parent = parent.as_ref().map(|p| p.as_str()),
            "Guest type registered"
        );
        self.guests.insert(
            id.clone(),
            GuestType {
                id,
                parent,
                detection_name: detection_name.map(str::to_string),
            },
        );
        Ok(())
    }

    /// Binds a capability for a guest type. Rebinding the same
    /// (guest, capability) pair overwrites the previous binding, so a plugin
    /// registered later can intentionally override an earlier one.
    pub fn bind_capability(
        &mut self,
        guest_id: impl Into<GuestTypeId>,
        name: impl Into<CapabilityName>,
        binding: CapabilityBinding<H>,
    ) -> Result<()> {
        let guest_id = guest_id.into();
        if !self.guests.contains_key(&guest_id) {
            return Err(Error::UnknownGuest(guest_id));
        }
        let name = name.into();
        tracing::debug!(
            guest = %guest_id,
            capability = %name,
            disabled = matches!(binding, CapabilityBinding::Disabled),
            "Capability bound"
        );
        self.bindings.insert((guest_id, name), binding);
        Ok(())
    }

    /// Suppresses a capability for a guest type even when an ancestor
    /// implements it. Distinct from leaving the capability unbound, which
    /// would let the ancestor's implementation run.
    pub fn disable_capability(
        &mut self,
        guest_id: impl Into<GuestTypeId>,
        name: impl Into<CapabilityName>,
    ) -> Result<()> {
        self.bind_capability(guest_id, name, CapabilityBinding::Disabled)
    }

    /// Resolves a capability for a guest type, walking from the guest up its
    /// parent chain. The first binding found wins: a disablement on the way
    /// up is final and is not overridden by a more distant ancestor's
    /// implementation.
    ///
    /// Parents must pre-exist at registration and guest types are immutable,
    /// so the public API cannot construct a cycle; the walk still fails with
    /// [`Error::CyclicInheritance`] if one is ever encountered.
    pub fn resolve(&self, guest_id: &str, name: &str) -> Result<Resolved<'_, H>> {
        let name = CapabilityName::from(name);
        let mut current = GuestTypeId::from(guest_id);
        let mut seen = HashSet::new();
        loop {
            let Some(guest) = self.guests.get(&current) else {
                // Reachable only for the starting point; every recorded
                // parent was checked at registration.
                return Err(Error::UnknownGuest(current));
            };
            if !seen.insert(current.clone()) {
                return Err(Error::CyclicInheritance(current));
            }
            match self.bindings.get(&(current, name.clone())) {
                Some(CapabilityBinding::Implementation(handler)) => {
                    return Ok(Resolved::Implementation(handler));
                }
                Some(CapabilityBinding::Disabled) => return Ok(Resolved::Disabled),
                None => {}
            }
            match &guest.parent {
                Some(parent) => current = parent.clone(),
                None => return Ok(Resolved::NotFound),
            }
        }
    }

    /// Looks up a registered guest type.
    pub fn guest(&self, id: &str) -> Option<&GuestType> {
        self.guests.get(id)
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.guests.contains_key(id)
    }
}

impl<H> Default for GuestRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}
