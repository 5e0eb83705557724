use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Identifier of a guest operating-system family (e.g. "linux", "debian",
/// "libreelec").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuestTypeId(String);

impl GuestTypeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GuestTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GuestTypeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for GuestTypeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for GuestTypeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Name of a unit of guest automation behavior invoked generically across
/// guest types (e.g. "change_host_name").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilityName(String);

impl CapabilityName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CapabilityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CapabilityName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for CapabilityName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A guest operating-system family known to the registry. Immutable once
/// registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestType {
    pub id: GuestTypeId,
    /// Guest type this one specializes. Capability resolution falls back to
    /// the parent when this type has no binding of its own.
    pub parent: Option<GuestTypeId>,
    /// Value matched against the `ID` variable of the guest's
    /// `/etc/os-release` by the host tool's detection machinery. Abstract
    /// base types like `linux` typically leave this unset.
    pub detection_name: Option<String>,
}

/// What a (guest type, capability) pair is bound to.
#[derive(Debug, Clone)]
pub enum CapabilityBinding<H> {
    /// A handler to run for this capability.
    Implementation(H),
    /// The capability is actively suppressed for this guest type, even if an
    /// ancestor implements it.
    Disabled,
}

/// Outcome of resolving a capability for a guest type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved<'a, H> {
    /// Nearest binding on the parent chain is an implementation.
    Implementation(&'a H),
    /// Nearest binding on the parent chain is an explicit disablement.
    Disabled,
    /// No guest type on the chain binds this capability at all.
    NotFound,
}

impl<'a, H> Resolved<'a, H> {
    pub fn implementation(&self) -> Option<&'a H> {
        match self {
            Resolved::Implementation(handler) => Some(handler),
            _ => None,
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, Resolved::Disabled)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Resolved::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guest_type_id_serializes_as_plain_string() {
        let id = GuestTypeId::new("libreelec");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"libreelec\"");
        let back: GuestTypeId = serde_json::from_str("\"libreelec\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn capability_name_serializes_as_plain_string() {
        let name = CapabilityName::new("change_host_name");
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"change_host_name\"");
        let back: CapabilityName = serde_json::from_str("\"change_host_name\"").unwrap();
        assert_eq!(back, name);
    }

    #[test]
    fn resolved_predicates() {
        let handler = "handler";
        let resolved: Resolved<'_, &str> = Resolved::Implementation(&handler);
        assert_eq!(resolved.implementation(), Some(&handler));
        assert!(!resolved.is_disabled());
        assert!(!resolved.is_not_found());

        let disabled: Resolved<'_, &str> = Resolved::Disabled;
        assert!(disabled.is_disabled());
        assert_eq!(disabled.implementation(), None);

        let not_found: Resolved<'_, &str> = Resolved::NotFound;
        assert!(not_found.is_not_found());
        assert_eq!(not_found.implementation(), None);
    }
}
