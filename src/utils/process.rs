//! Subprocess helpers.

use crate::Result;
use std::process::Output;
use tokio::process::Command;
use tokio::time::{timeout, Duration};

/// Run a command to completion, killing it if it outlives `timeout_secs`.
///
/// A spawn failure surfaces as `Error::Io` (`NotFound` when the program is
/// missing); a timeout as `Error::Timeout`.
pub async fn output_with_timeout(
    mut command: Command,
    what: &str,
    timeout_secs: u64,
) -> Result<Output> {
    command.kill_on_drop(true);

    let output = timeout(Duration::from_secs(timeout_secs), command.output())
        .await
        .map_err(|_| crate::Error::timeout(what, timeout_secs))??;

    Ok(output)
}

/// Trimmed stderr of a finished process, for error messages.
pub fn stderr_summary(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if stderr.is_empty() {
        format!("exit status {}", output.status)
    } else {
        stderr
    }
}

/// Check whether a program can be started with the given version flag.
pub fn is_installed(program: &str, version_flag: &str) -> bool {
    std::process::Command::new(program)
        .arg(version_flag)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// First line of a program's version output.
pub fn version_line(program: &str, version_flag: &str) -> Result<String> {
    let output = std::process::Command::new(program).arg(version_flag).output()?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let first_line = stdout.lines().next().unwrap_or("unknown");

    Ok(first_line.to_string())
}
