//! Console presentation: per-device notices and run summaries
//!
//! Reports are written to stdout; per-device notices and prompts go to stderr so
//! `--json` output stays parseable.

use anyhow::Result;
use colored::Colorize;
use devsweep_core::domain::{ClassSelection, DeviceClass, DeviceId, RunSummary};
use devsweep_core::port::RemovalReporter;
use std::io::{Stderr, Write};
use std::sync::Mutex;
use tabled::{Table, Tabled};

/// Writes a line per failed removal as soon as it happens
pub struct ConsoleReporter<W> {
    out: Mutex<W>,
}

impl ConsoleReporter<Stderr> {
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }
}

impl<W: Write + Send> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl<W: Write + Send> RemovalReporter for ConsoleReporter<W> {
    fn device_removed(&self, _device: &DeviceId) {}

    fn device_failed(&self, device: &DeviceId) {
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        // A closed stderr must not abort the run
        let _ = writeln!(
            out,
            "{}",
            format!("✗ Failed to remove device \"{}\"", device).red()
        );
    }
}

#[derive(Tabled)]
struct DeviceRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Device")]
    device: String,
}

/// Notice for input that did not name a known class, if any
pub fn class_notice(selection: &ClassSelection) -> Option<String> {
    match selection {
        ClassSelection::Fallback { requested, class } => Some(format!(
            "Device class \"{}\" is not valid, using \"{}\"",
            requested, class
        )),
        ClassSelection::Chosen(_) | ClassSelection::Defaulted(_) => None,
    }
}

/// Prompt shown when no class was given on the command line
pub fn class_prompt(classes: &[String]) -> String {
    let quoted: Vec<String> = classes.iter().map(|c| format!("\"{}\"", c)).collect();
    let default = classes.first().map(String::as_str).unwrap_or_default();
    format!(
        "Enter {} to choose the device class, or press Enter for \"{}\"",
        quoted.join(" or "),
        default
    )
}

/// One-line result, pluralized
pub fn summary_line(summary: &RunSummary) -> String {
    let removed = match summary.removed {
        0 => "No devices were removed".to_string(),
        1 => "1 disconnected device was removed".to_string(),
        n => format!("{} disconnected devices were removed", n),
    };
    format!("{} in {}ms", removed, summary.elapsed_ms)
}

/// Render a finished run, as JSON or as a colored status line
pub fn write_summary(out: &mut impl Write, summary: &RunSummary, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(summary)?)?;
        return Ok(());
    }

    let line = summary_line(summary);
    if summary.is_clean() {
        writeln!(out, "{}", line.green().bold())?;
    } else {
        writeln!(out, "{}", line.yellow().bold())?;
        writeln!(
            out,
            "  {} {}",
            "Not removed:".bold(),
            summary.failures.len().to_string().red()
        )?;
    }
    Ok(())
}

/// Render the devices a dry run found, as JSON or as a table
pub fn write_scan(
    out: &mut impl Write,
    class: &DeviceClass,
    devices: &[DeviceId],
    json: bool,
) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(devices)?)?;
    } else if devices.is_empty() {
        writeln!(out, "{}", "No disconnected devices found".green())?;
    } else {
        writeln!(
            out,
            "{}",
            format!("{} disconnected device(s) of class \"{}\":", devices.len(), class)
                .cyan()
                .bold()
        )?;
        writeln!(out, "{}", device_table(devices))?;
    }
    Ok(())
}

/// Table of devices a dry run would remove
pub fn device_table(devices: &[DeviceId]) -> String {
    let rows: Vec<DeviceRow> = devices
        .iter()
        .enumerate()
        .map(|(i, device)| DeviceRow {
            index: i + 1,
            device: device.to_string(),
        })
        .collect();
    Table::new(rows).to_string()
}
