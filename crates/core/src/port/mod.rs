// Port Layer - Interfaces for external dependencies

pub mod device_tool;
pub mod reporter;
pub mod time_provider; // For deterministic elapsed time

// Re-exports
pub use device_tool::{DeviceTool, ExecutionError};
pub use reporter::{NoopReporter, RemovalReporter};
pub use time_provider::{SystemTimeProvider, TimeProvider};
