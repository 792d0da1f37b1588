// Process-backed device tool
// reason: tokio::process so the core can await the tool without blocking the runtime
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

use devsweep_core::port::device_tool::{DeviceTool, ExecutionError};

/// Hide the console window of the spawned tool (CREATE_NO_WINDOW)
#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Device tool that spawns the configured executable once per call
///
/// stdout is captured, stderr and stdin are detached. No shell is involved and
/// no timeout is applied: a hung tool hangs the caller.
pub struct ProcessDeviceTool {
    tool_path: PathBuf,
}

impl ProcessDeviceTool {
    /// Create a process device tool
    ///
    /// # Example
    /// ```ignore
    /// let tool = ProcessDeviceTool::new("DevCon.exe");
    /// let listing = tool.execute("findall =ports").await?;
    /// ```
    pub fn new(tool_path: impl Into<PathBuf>) -> Self {
        Self {
            tool_path: tool_path.into(),
        }
    }

    /// Build the command line `<tool> <arguments>`
    fn build_command(&self, arguments: &str) -> Command {
        let mut std_cmd = std::process::Command::new(&self.tool_path);

        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;

            // Passed through untouched so the tool sees its own quoting convention
            if !arguments.is_empty() {
                std_cmd.raw_arg(arguments);
            }
            std_cmd.creation_flags(CREATE_NO_WINDOW);
        }

        #[cfg(not(windows))]
        {
            std_cmd.args(split_arguments(arguments));
        }

        std_cmd
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null());

        Command::from(std_cmd)
    }
}

#[async_trait]
impl DeviceTool for ProcessDeviceTool {
    async fn execute(&self, arguments: &str) -> Result<String, ExecutionError> {
        debug!(
            tool = %self.tool_path.display(),
            arguments = %arguments,
            "Starting device tool"
        );

        let child = self.build_command(arguments).spawn().map_err(|e| {
            ExecutionError::SpawnFailed(format!("{}: {}", self.tool_path.display(), e))
        })?;

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| ExecutionError::IoError(e.to_string()))?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();

        debug!(
            tool = %self.tool_path.display(),
            exit_code = ?output.status.code(),
            output_bytes = stdout.len(),
            "Device tool finished"
        );

        Ok(stdout)
    }
}

/// Split an argument string the way a Windows tool would see it
///
/// Whitespace separates arguments except inside double quotes; the quotes
/// themselves are dropped, so `remove @"A B"` becomes `remove`, `@A B`.
#[cfg_attr(windows, allow(dead_code))]
fn split_arguments(arguments: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut pending = false;

    for ch in arguments.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                pending = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if pending {
                    args.push(std::mem::take(&mut current));
                    pending = false;
                }
            }
            c => {
                current.push(c);
                pending = true;
            }
        }
    }

    if pending {
        args.push(current);
    }

    args
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_arguments() {
        assert_eq!(split_arguments("resources =ports"), vec!["resources", "=ports"]);
        assert_eq!(
            split_arguments(r#"remove @"USB\VID_1 2""#),
            vec!["remove", r"@USB\VID_1 2"]
        );
        assert_eq!(split_arguments(r#"remove @"""#), vec!["remove", "@"]);
        assert!(split_arguments("   ").is_empty());
        assert!(split_arguments("").is_empty());
    }

    #[tokio::test]
    async fn test_execute_missing_tool() {
        let tool = ProcessDeviceTool::new("devsweep-definitely-missing-tool");

        let result = tool.execute("findall =ports").await;

        assert!(matches!(result, Err(ExecutionError::SpawnFailed(_))));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_execute_captures_stdout() {
        let tool = ProcessDeviceTool::new("echo");

        let output = tool.execute("resources =ports").await.unwrap();

        assert_eq!(output, "resources =ports\n");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_execute_groups_quoted_identifier() {
        let tool = ProcessDeviceTool::new("printf");

        let output = tool.execute(r#"%s| @"ACPI\PNP0501\1 x""#).await.unwrap();

        assert_eq!(output, r"@ACPI\PNP0501\1 x|");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_execute_ignores_exit_status() {
        // `false` exits non-zero with no output; still a successful capture
        let tool = ProcessDeviceTool::new("false");

        let output = tool.execute("").await.unwrap();

        assert!(output.is_empty());
    }
}
