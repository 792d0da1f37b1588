// Domain Layer - Pure device types

pub mod device;
pub mod error;
pub mod summary;

// Re-exports
pub use device::{ClassSelection, DeviceClass, DeviceId, QueryKind};
pub use error::DomainError;
pub use summary::RunSummary;
