//! ProcessDeviceTool wired into CleanupService
//!
//! On unix a small shell script stands in for the device tool and answers the
//! default query and removal templates.

use std::sync::Arc;

use devsweep_core::application::CleanupService;
use devsweep_core::domain::DeviceId;
use devsweep_core::port::reporter::mocks::{RecordingReporter, ReportEvent};
use devsweep_core::port::{ExecutionError, SystemTimeProvider};
use devsweep_core::{AppError, CleanupConfig};
use devsweep_infra_system::ProcessDeviceTool;

#[tokio::test]
async fn test_missing_tool_aborts_run() {
    let config = CleanupConfig {
        tool_path: "/nonexistent/devsweep/DevCon.exe".into(),
        ..CleanupConfig::default()
    };
    let tool = Arc::new(ProcessDeviceTool::new(config.tool_path.clone()));
    let time_provider = Arc::new(SystemTimeProvider::new());
    let service = CleanupService::new(tool, time_provider, Arc::new(config)).unwrap();
    let class = service.config().default_class();
    let reporter = RecordingReporter::new();

    let result = service.run(&class, &reporter).await;

    assert!(matches!(
        result,
        Err(AppError::Execution(ExecutionError::SpawnFailed(_)))
    ));
    assert!(reporter.events().is_empty());
}

#[cfg(unix)]
mod unix {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;

    const FAKE_TOOL: &str = r#"#!/bin/sh
case "$1" in
  resources)
    printf 'COM3\n    Name: Port (COM3)\n\nCOM5\n2 matching device(s) found.\n'
    ;;
  findall)
    printf 'COM3 : Port (COM3)\nCOM5 : Port (COM5)\nCOM7 : Port (COM7)\nCOM 9 : Port (COM9)\n'
    ;;
  remove)
    if [ "$2" = "@COM7" ]; then
      printf 'COM7: Removed\n1 device(s) were removed.\n'
    else
      printf 'No devices were removed.\n0 device(s) were removed.\n'
    fi
    ;;
  *)
    exit 2
    ;;
esac
"#;

    fn install_fake_tool(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "devsweep-it-{}-{}",
            name,
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();

        let path = dir.join("fake-devcon");
        std::fs::write(&path, FAKE_TOOL).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[tokio::test]
    async fn test_run_against_fake_tool() {
        let tool_path = install_fake_tool("run");
        let config = CleanupConfig {
            tool_path: tool_path.clone(),
            ..CleanupConfig::default()
        };
        let tool = Arc::new(ProcessDeviceTool::new(tool_path.clone()));
        let time_provider = Arc::new(SystemTimeProvider::new());
        let service = CleanupService::new(tool, time_provider, Arc::new(config)).unwrap();
        let class = service.config().resolve_class("ports").into_class();
        let reporter = RecordingReporter::new();

        let disconnected = service.scan(&class).await.unwrap();
        assert_eq!(
            disconnected,
            vec![DeviceId::from("COM7"), DeviceId::from("COM 9")]
        );

        let summary = service.run(&class, &reporter).await.unwrap();

        assert_eq!(summary.removed, 1);
        assert_eq!(summary.failures, vec![DeviceId::from("COM 9")]);
        assert!(summary.elapsed_ms >= 0);
        assert_eq!(
            reporter.events(),
            vec![
                ReportEvent::Removed(DeviceId::from("COM7")),
                ReportEvent::Failed(DeviceId::from("COM 9")),
            ]
        );

        let _ = std::fs::remove_dir_all(tool_path.parent().unwrap());
    }
}
