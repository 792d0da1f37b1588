// Removal Reporter Port
// Per-device progress sink owned by the presentation layer

use crate::domain::DeviceId;

/// Receives one call per removal attempt, synchronously and in attempt order
pub trait RemovalReporter: Send + Sync {
    fn device_removed(&self, device: &DeviceId);

    fn device_failed(&self, device: &DeviceId);
}

/// Reporter that drops every notification (tracing still records them)
pub struct NoopReporter;

impl RemovalReporter for NoopReporter {
    fn device_removed(&self, _device: &DeviceId) {}

    fn device_failed(&self, _device: &DeviceId) {}
}

pub mod mocks {
    use super::*;
    use std::sync::Mutex;

    /// Event recorded by [`RecordingReporter`]
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ReportEvent {
        Removed(DeviceId),
        Failed(DeviceId),
    }

    /// Reporter that keeps every event for later assertions
    #[derive(Default)]
    pub struct RecordingReporter {
        events: Mutex<Vec<ReportEvent>>,
    }

    impl RecordingReporter {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn events(&self) -> Vec<ReportEvent> {
            self.events.lock().unwrap().clone()
        }

        pub fn failed(&self) -> Vec<DeviceId> {
            self.events()
                .into_iter()
                .filter_map(|event| match event {
                    ReportEvent::Failed(device) => Some(device),
                    ReportEvent::Removed(_) => None,
                })
                .collect()
        }
    }

    impl RemovalReporter for RecordingReporter {
        fn device_removed(&self, device: &DeviceId) {
            self.events
                .lock()
                .unwrap()
                .push(ReportEvent::Removed(device.clone()));
        }

        fn device_failed(&self, device: &DeviceId) {
            self.events
                .lock()
                .unwrap()
                .push(ReportEvent::Failed(device.clone()));
        }
    }
}
