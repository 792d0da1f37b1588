// Device Tool Port
// Abstraction over the external device-management utility (devcon-style CLI)

use async_trait::async_trait;
use thiserror::Error;

/// Device tool errors
///
/// Any of these aborts the run: there is no partial result once the tool
/// cannot be driven.
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Spawn failed: {0}")]
    SpawnFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Device Tool trait
///
/// Implementations:
/// - ProcessDeviceTool: spawns the configured executable (infra-system)
/// - mocks::MockDeviceTool: scripted outputs for tests
#[async_trait]
pub trait DeviceTool: Send + Sync {
    /// Run the tool with a single argument string and return its captured stdout
    ///
    /// Blocks until the output stream is drained. No timeout is applied.
    ///
    /// # Errors
    /// - ExecutionError::SpawnFailed if the executable is missing or unlaunchable
    /// - ExecutionError::IoError if reading the output fails
    async fn execute(&self, arguments: &str) -> Result<String, ExecutionError>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    /// Mock Device Tool with per-argument scripted output
    ///
    /// Unscripted arguments return an empty string, which parses to no devices
    /// and fails any removal.
    #[derive(Clone, Default)]
    pub struct MockDeviceTool {
        responses: Arc<Mutex<HashMap<String, String>>>,
        calls: Arc<Mutex<Vec<String>>>,
        spawn_failure: Option<String>,
    }

    impl MockDeviceTool {
        pub fn new() -> Self {
            Self::default()
        }

        /// Tool that cannot be launched at all
        pub fn new_unlaunchable(message: impl Into<String>) -> Self {
            Self {
                spawn_failure: Some(message.into()),
                ..Self::default()
            }
        }

        pub fn with_response(self, arguments: impl Into<String>, output: impl Into<String>) -> Self {
            self.responses
                .lock()
                .unwrap()
                .insert(arguments.into(), output.into());
            self
        }

        /// Arguments received so far, in call order
        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl DeviceTool for MockDeviceTool {
        async fn execute(&self, arguments: &str) -> Result<String, ExecutionError> {
            self.calls.lock().unwrap().push(arguments.to_string());

            if let Some(msg) = &self.spawn_failure {
                return Err(ExecutionError::SpawnFailed(msg.clone()));
            }

            Ok(self
                .responses
                .lock()
                .unwrap()
                .get(arguments)
                .cloned()
                .unwrap_or_default())
        }
    }
}
