pub mod error;
pub mod registry;
pub mod types;

pub use error::{Error, Result};
pub use registry::GuestRegistry;
pub use types::{CapabilityBinding, CapabilityName, GuestType, GuestTypeId, Resolved};
