use crate::types::GuestTypeId;

/// Errors surfaced while registering guest types or resolving capabilities.
///
/// All variants indicate a misconfigured plugin set and should abort
/// initialization. A capability with no binding anywhere on the chain is not
/// an error; it resolves to [`Resolved::NotFound`](crate::Resolved::NotFound).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("guest type '{0}' is already registered")]
    DuplicateGuest(GuestTypeId),

    #[error("parent guest type '{0}' is not registered")]
    UnknownParent(GuestTypeId),

    #[error("guest type '{0}' is not registered")]
    UnknownGuest(GuestTypeId),

    #[error("guest type inheritance cycle detected at '{0}'")]
    CyclicInheritance(GuestTypeId),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_duplicate_guest() {
        let err = Error::DuplicateGuest(GuestTypeId::new("libreelec"));
        assert_eq!(
            err.to_string(),
            "guest type 'libreelec' is already registered"
        );
    }

    #[test]
    fn error_display_unknown_parent() {
        let err = Error::UnknownParent(GuestTypeId::new("linux"));
        assert_eq!(err.to_string(), "parent guest type 'linux' is not registered");
    }

    #[test]
    fn error_display_unknown_guest() {
        let err = Error::UnknownGuest(GuestTypeId::new("haiku"));
        assert_eq!(err.to_string(), "guest type 'haiku' is not registered");
    }

    #[test]
    fn error_display_cyclic_inheritance() {
        let err = Error::CyclicInheritance(GuestTypeId::new("debian"));
        assert_eq!(
            err.to_string(),
            "guest type inheritance cycle detected at 'debian'"
        );
    }
}
