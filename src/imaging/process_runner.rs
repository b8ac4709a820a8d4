//! Subprocess execution on top of `tokio::process`.
//!
//! | Concern | How |
//! |---|---|
//! | Arguments | discrete argv, no shell involved |
//! | stdin | closed (`Stdio::null`) |
//! | stdout / stderr | captured, decoded as lossy UTF-8 |
//! | Time budget | `tokio::time::timeout` around `wait_with_output` |
//! | Cancellation | `kill_on_drop`: the child is killed when the wait is abandoned |

use super::backend::{CommandRunner, ToolError, ToolOutput};
use async_trait::async_trait;
use std::ffi::{OsStr, OsString};
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::process::Command;
use tracing::{debug, warn};

/// Runs the tool as a real child process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(
        &self,
        program: &OsStr,
        args: &[OsString],
        timeout: Duration,
    ) -> Result<ToolOutput, ToolError> {
        let name = program.to_string_lossy().into_owned();
        let started = Instant::now();

        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| ToolError::Spawn {
                program: name.clone(),
                source,
            })?;

        let output = match tokio::time::timeout(timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(|source| ToolError::Spawn {
                program: name.clone(),
                source,
            })?,
            Err(_) => {
                // Dropping the wait future dropped the child, which kills it.
                warn!(program = %name, ?timeout, "tool timed out, killed");
                return Err(ToolError::Timeout {
                    program: name,
                    timeout,
                });
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        debug!(
            program = %name,
            status = ?output.status.code(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "tool finished"
        );

        if output.status.success() {
            Ok(ToolOutput { stdout, stderr })
        } else {
            Err(ToolError::NonZeroExit {
                program: name,
                code: output.status.code(),
                stdout,
                stderr,
            })
        }
    }
}
