//! Command runner trait and shared types.
//!
//! The [`CommandRunner`] trait is the single seam between the operations and
//! the operating system: it runs one program with an argv and a time budget
//! and reports what came back.
//!
//! The production implementation is
//! [`ProcessRunner`](super::process_runner::ProcessRunner), built on
//! `tokio::process`. Tests substitute a recording mock.

use async_trait::async_trait;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{program} exited with {}: {}", exit_description(.code), .stderr.trim())]
    NonZeroExit {
        program: String,
        /// `None` when the process was terminated by a signal.
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },
    #[error("{program} timed out after {timeout:?}")]
    Timeout { program: String, timeout: Duration },
    #[error("failed to set timestamp on {}: {source}", .path.display())]
    Timestamp {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("a GIF animation needs at least one source frame")]
    NoFrames,
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "a signal".to_string(),
    }
}

impl ToolError {
    /// True for [`ToolError::Timeout`].
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

/// Captured output of a successful run (exit status 0).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Runs a single external program to completion.
///
/// Implementations must return:
/// - [`ToolError::Spawn`] when the program cannot be started,
/// - [`ToolError::NonZeroExit`] when it ends with a failure status,
/// - [`ToolError::Timeout`] when `timeout` elapses first, after killing it.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(
        &self,
        program: &OsStr,
        args: &[OsString],
        timeout: Duration,
    ) -> Result<ToolOutput, ToolError>;
}
