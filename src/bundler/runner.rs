//! Bundler process execution.
//!
//! Spawns a [`MkbundleCommand`], streams its output to the debug log while
//! capturing it, and turns a non-zero exit into [`Error::ToolFailed`].

use crate::bundler::{Error, MkbundleCommand, Result};
use std::process::{ExitStatus, Stdio};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;

/// Captured result of a finished bundler process.
#[derive(Debug)]
pub struct ToolOutput {
    /// Exit status of the process.
    pub status: ExitStatus,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
}

/// Runs `command` to completion.
///
/// Blocks the calling task until the process exits. There is no timeout.
///
/// # Errors
///
/// - [`Error::CommandFailed`] if the process cannot be spawned or waited on
/// - [`Error::ToolFailed`] if it exits unsuccessfully
pub async fn run_command(command: &MkbundleCommand) -> Result<ToolOutput> {
    log::info!("Running command: {}", command);

    let mut process = Command::new(command.program());
    process
        .args(command.args())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(env) = command.env() {
        process.env(&env.name, &env.value);
    }

    let mut child = process.spawn().map_err(|e| Error::CommandFailed {
        command: command.program().to_string(),
        error: e,
    })?;

    let (stdout, stderr) = tokio::join!(
        collect_lines(child.stdout.take()),
        collect_lines(child.stderr.take()),
    );

    let status = child.wait().await.map_err(|e| Error::CommandFailed {
        command: command.program().to_string(),
        error: e,
    })?;

    if !status.success() {
        for line in stderr.lines() {
            log::warn!("  {}", line);
        }
        return Err(Error::ToolFailed {
            command: command.to_string(),
            status,
            stderr,
        });
    }

    Ok(ToolOutput {
        status,
        stdout,
        stderr,
    })
}

/// Drains a child pipe to EOF, logging each line at debug level and
/// returning the whole text.
///
/// Bytes that are not valid UTF-8 are replaced rather than ending the read, so
/// the child never blocks or dies on a full pipe.
async fn collect_lines<R: AsyncRead + Unpin>(pipe: Option<R>) -> String {
    let mut captured = String::new();
    let Some(pipe) = pipe else {
        return captured;
    };

    let mut reader = BufReader::new(pipe);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                let line = line.trim_end_matches(['\n', '\r']);
                log::debug!("  {}", line);
                captured.push_str(line);
                captured.push('\n');
            }
            Err(e) => {
                log::debug!("pipe read error: {}", e);
                break;
            }
        }
    }
    captured
}
