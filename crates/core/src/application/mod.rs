// Application Layer - Use Cases and Business Logic

pub mod cleanup;
pub mod parser;
pub mod reconcile;
pub mod remover;

// Re-exports
pub use cleanup::CleanupService;
pub use parser::{parse_active_devices, parse_all_devices};
pub use reconcile::reconcile;
pub use remover::DeviceRemover;
