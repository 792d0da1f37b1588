// Device removal through the device tool

use crate::config::CleanupConfig;
use crate::domain::DeviceId;
use crate::port::{DeviceTool, ExecutionError};
use std::sync::Arc;
use tracing::debug;

/// Removes one device per call and classifies the outcome
pub struct DeviceRemover {
    tool: Arc<dyn DeviceTool>,
    config: Arc<CleanupConfig>,
}

impl DeviceRemover {
    pub fn new(tool: Arc<dyn DeviceTool>, config: Arc<CleanupConfig>) -> Self {
        Self { tool, config }
    }

    /// Remove `device`, returning whether the tool reported the removal
    ///
    /// Success is decided solely by the configured marker substring in the
    /// tool output. A tool that cannot be launched is an error, not a `false`.
    pub async fn remove(&self, device: &DeviceId) -> Result<bool, ExecutionError> {
        let arguments = self.config.removal_arguments(device);
        let output = self.tool.execute(&arguments).await?;
        let removed = is_removal_confirmed(&output, &self.config.success_marker);

        debug!(device = %device, removed, "Removal attempted");

        Ok(removed)
    }
}

/// Marker check on raw removal output
pub fn is_removal_confirmed(output: &str, success_marker: &str) -> bool {
    output.contains(success_marker)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SUCCESS_MARKER;
    use crate::port::device_tool::mocks::MockDeviceTool;

    #[test]
    fn test_marker_check() {
        assert!(is_removal_confirmed(
            "1 device(s) were removed.",
            DEFAULT_SUCCESS_MARKER
        ));
        assert!(is_removal_confirmed(
            "COM7: Removed\r\n1 device(s) were removed.\r\n",
            DEFAULT_SUCCESS_MARKER
        ));
        assert!(!is_removal_confirmed(
            "0 device(s) were removed.",
            DEFAULT_SUCCESS_MARKER
        ));
        assert!(!is_removal_confirmed(
            "2 device(s) were removed.",
            DEFAULT_SUCCESS_MARKER
        ));
        assert!(!is_removal_confirmed("", DEFAULT_SUCCESS_MARKER));
    }

    #[tokio::test]
    async fn test_remove_sends_template_and_reads_marker() {
        let tool = MockDeviceTool::new()
            .with_response(r#"remove @"COM7""#, "COM7: Removed\n1 device(s) were removed.");
        let remover = DeviceRemover::new(Arc::new(tool.clone()), Arc::new(CleanupConfig::default()));

        assert!(remover.remove(&DeviceId::from("COM7")).await.unwrap());
        assert!(!remover.remove(&DeviceId::from("COM8")).await.unwrap());
        assert_eq!(tool.calls(), vec![r#"remove @"COM7""#, r#"remove @"COM8""#]);
    }

    #[tokio::test]
    async fn test_remove_uses_configured_marker() {
        let config = CleanupConfig {
            success_marker: "1 Gerät(e) wurde(n) entfernt.".to_string(),
            ..CleanupConfig::default()
        };
        let tool = MockDeviceTool::new()
            .with_response(r#"remove @"COM7""#, "1 Gerät(e) wurde(n) entfernt.");
        let remover = DeviceRemover::new(Arc::new(tool), Arc::new(config));

        assert!(remover.remove(&DeviceId::from("COM7")).await.unwrap());
    }

    #[tokio::test]
    async fn test_remove_propagates_launch_failure() {
        let tool = MockDeviceTool::new_unlaunchable("not found");
        let remover = DeviceRemover::new(Arc::new(tool), Arc::new(CleanupConfig::default()));

        let result = remover.remove(&DeviceId::from("COM7")).await;
        assert!(matches!(result, Err(ExecutionError::SpawnFailed(_))));
    }
}
