// devsweep Core - Domain Logic & Ports
// NO infrastructure dependencies: the device tool is reached only through port::DeviceTool

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;

pub use config::CleanupConfig;
pub use error::{AppError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
