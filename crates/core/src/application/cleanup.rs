// Cleanup Service - the run driver
// Query -> parse -> reconcile -> remove, strictly one step at a time

use crate::application::reconcile::reconcile;
use crate::application::remover::DeviceRemover;
use crate::config::CleanupConfig;
use crate::domain::{DeviceClass, DeviceId, QueryKind, RunSummary};
use crate::error::Result;
use crate::port::{DeviceTool, RemovalReporter, TimeProvider};
use std::sync::Arc;
use tracing::{info, warn};

/// Cleanup Service
///
/// Holds no state between runs; every `run` builds a fresh [`RunSummary`].
pub struct CleanupService {
    tool: Arc<dyn DeviceTool>,
    time_provider: Arc<dyn TimeProvider>,
    config: Arc<CleanupConfig>,
    remover: DeviceRemover,
}

impl CleanupService {
    /// Create a cleanup service
    ///
    /// # Errors
    /// - AppError::Domain if `config` fails validation
    pub fn new(
        tool: Arc<dyn DeviceTool>,
        time_provider: Arc<dyn TimeProvider>,
        config: Arc<CleanupConfig>,
    ) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            remover: DeviceRemover::new(tool.clone(), config.clone()),
            tool,
            time_provider,
            config,
        })
    }

    pub fn config(&self) -> &CleanupConfig {
        &self.config
    }

    /// Run one listing query and parse it with the matching grammar
    pub async fn query(&self, kind: QueryKind, class: &DeviceClass) -> Result<Vec<DeviceId>> {
        let arguments = self.config.query_arguments(kind, class);
        let output = self.tool.execute(&arguments).await?;
        let devices = kind.parse(&output);

        info!(
            query = %kind,
            device_class = %class,
            devices = devices.len(),
            "Device listing parsed"
        );

        Ok(devices)
    }

    /// Registered-but-inactive devices for `class`, without removing anything
    pub async fn scan(&self, class: &DeviceClass) -> Result<Vec<DeviceId>> {
        let active = self.query(QueryKind::ActiveDevices, class).await?;
        let all = self.query(QueryKind::AllRegisteredDevices, class).await?;
        let disconnected = reconcile(&active, &all);

        info!(
            device_class = %class,
            active = active.len(),
            registered = all.len(),
            disconnected = disconnected.len(),
            "Device listings reconciled"
        );

        Ok(disconnected)
    }

    /// Scan and remove every disconnected device of `class`
    ///
    /// Removal failures are reported to `reporter` as they happen and collected in
    /// the summary; only a tool launch failure aborts the run.
    pub async fn run(
        &self,
        class: &DeviceClass,
        reporter: &dyn RemovalReporter,
    ) -> Result<RunSummary> {
        let start_time = self.time_provider.now_millis();
        let mut summary = RunSummary::new(class.clone());

        let disconnected = self.scan(class).await?;
        summary.disconnected = disconnected.len();

        for device in &disconnected {
            if self.remover.remove(device).await? {
                summary.removed += 1;
                reporter.device_removed(device);
                continue;
            }

            warn!(device = %device, "Device removal failed");
            reporter.device_failed(device);
            summary.failures.push(device.clone());
        }

        summary.elapsed_ms = self.time_provider.now_millis() - start_time;

        info!(
            device_class = %class,
            removed = summary.removed,
            failed = summary.failures.len(),
            elapsed_ms = summary.elapsed_ms,
            "Cleanup run completed"
        );

        Ok(summary)
    }
}
