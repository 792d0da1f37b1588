//! devsweep - remove registrations of devices that are no longer connected
//!
//! Composition root: parses flags, wires the process tool into the core services
//! and renders the result.

mod logging;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::io::{BufRead, Write};
use std::sync::Arc;
use tracing::info;

use devsweep_core::application::CleanupService;
use devsweep_core::config::{
    CleanupConfig, DEFAULT_DEVICE_CLASSES, DEFAULT_SUCCESS_MARKER, DEFAULT_TOOL_PATH,
};
use devsweep_core::domain::{ClassSelection, DeviceClass};
use devsweep_core::port::SystemTimeProvider;
use devsweep_infra_system::ProcessDeviceTool;

#[derive(Parser)]
#[command(name = "devsweep")]
#[command(about = "Remove stale registrations of disconnected devices", long_about = None)]
#[command(version)]
struct Cli {
    /// Device class to clean (prompted for when omitted)
    #[arg(short, long, env = "DEVSWEEP_CLASS")]
    class: Option<String>,

    /// Path to the device-management tool
    #[arg(long, env = "DEVSWEEP_TOOL", default_value = DEFAULT_TOOL_PATH)]
    tool: String,

    /// Text the tool prints after a successful single-device removal
    #[arg(long, env = "DEVSWEEP_SUCCESS_MARKER", default_value = DEFAULT_SUCCESS_MARKER)]
    success_marker: String,

    /// Allowed device classes, first is the default
    #[arg(long, value_delimiter = ',')]
    classes: Option<Vec<String>>,

    /// List disconnected devices without removing them
    #[arg(long)]
    dry_run: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn cleanup_config(&self) -> CleanupConfig {
        let available_classes = self.classes.clone().unwrap_or_else(|| {
            DEFAULT_DEVICE_CLASSES
                .iter()
                .map(|c| c.to_string())
                .collect()
        });

        CleanupConfig {
            tool_path: shellexpand::tilde(&self.tool).into_owned().into(),
            success_marker: self.success_marker.clone(),
            available_classes,
            ..CleanupConfig::default()
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging()?;

    let config = Arc::new(cli.cleanup_config());
    info!(
        tool = %config.tool_path.display(),
        classes = ?config.available_classes,
        "devsweep v{} starting",
        devsweep_core::VERSION
    );

    let tool = Arc::new(ProcessDeviceTool::new(config.tool_path.clone()));
    let service = CleanupService::new(tool, Arc::new(SystemTimeProvider::new()), config.clone())
        .context("Invalid configuration")?;

    let class = select_device_class(&cli, &config)?;

    let mut stdout = std::io::stdout().lock();

    if cli.dry_run {
        let devices = service
            .scan(&class)
            .await
            .with_context(|| format!("Failed to query {}", config.tool_path.display()))?;

        return output::write_scan(&mut stdout, &class, &devices, cli.json);
    }

    let summary = service
        .run(&class, &output::ConsoleReporter::stderr())
        .await
        .with_context(|| format!("Failed to run {}", config.tool_path.display()))?;

    output::write_summary(&mut stdout, &summary, cli.json)?;

    Ok(())
}

/// Class from the flag, or from stdin when the flag is absent
fn select_device_class(cli: &Cli, config: &CleanupConfig) -> Result<DeviceClass> {
    let input = match &cli.class {
        Some(class) => class.clone(),
        None => prompt_device_class(config)?,
    };

    let selection = config.resolve_class(&input);
    if let Some(notice) = output::class_notice(&selection) {
        eprintln!("{}", notice.yellow());
    }
    if let ClassSelection::Defaulted(class) = &selection {
        info!(device_class = %class, "No device class given, using default");
    }

    Ok(selection.into_class())
}

fn prompt_device_class(config: &CleanupConfig) -> Result<String> {
    eprintln!("{}", output::class_prompt(&config.available_classes));
    std::io::stderr().flush()?;

    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read device class")?;
    Ok(line)
}
