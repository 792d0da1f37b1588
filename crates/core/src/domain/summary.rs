// Run Summary Domain Model

use super::device::{DeviceClass, DeviceId};
use serde::Serialize;

/// Aggregate outcome of one cleanup run
///
/// Built fresh per run and handed to the presentation layer; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub device_class: DeviceClass,
    /// Registered-but-inactive devices found by reconciliation
    pub disconnected: usize,
    pub removed: usize,
    /// Devices whose removal output lacked the success marker, in attempt order
    pub failures: Vec<DeviceId>,
    pub elapsed_ms: i64,
}

impl RunSummary {
    pub fn new(device_class: DeviceClass) -> Self {
        Self {
            device_class,
            disconnected: 0,
            removed: 0,
            failures: Vec::new(),
            elapsed_ms: 0,
        }
    }

    /// True when every disconnected device was removed
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
