//! Executor that spawns real processes

use super::{CommandExecutor, display_command};
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::io;
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;
use tracing::info;

/// Runs commands as child processes, optionally in a fixed working directory
#[derive(Debug, Clone, Default)]
pub struct SystemExecutor {
    cwd: Option<PathBuf>,
}

impl SystemExecutor {
    /// Executor that runs commands in the current directory
    pub const fn new() -> Self {
        Self { cwd: None }
    }

    /// Executor that runs every command in `dir`
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            cwd: Some(dir.into()),
        }
    }
}

#[async_trait]
impl CommandExecutor for SystemExecutor {
    async fn run(&self, command: &[&str], bind_stdio: bool) -> Result<i32> {
        let line = display_command(command);
        let Some((program, args)) = command.split_first() else {
            return Err(Error::Spawn {
                command: line,
                source: io::Error::new(io::ErrorKind::InvalidInput, "empty command"),
            });
        };

        info!("Executing '{line}'");

        let mut cmd = Command::new(program);
        cmd.args(args).kill_on_drop(true);
        if let Some(ref dir) = self.cwd {
            cmd.current_dir(dir);
        }
        if bind_stdio {
            cmd.stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit());
        } else {
            cmd.stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null());
        }

        let mut child = cmd.spawn().map_err(|source| Error::Spawn {
            command: line.clone(),
            source,
        })?;

        // A failed signal registration disables the second branch rather than
        // counting as an interrupt.
        let status = tokio::select! {
            status = child.wait() => status.map_err(|source| Error::Spawn {
                command: line.clone(),
                source,
            })?,
            Ok(()) = tokio::signal::ctrl_c() => return Err(Error::Interrupted(line)),
        };

        Ok(exit_code(status))
    }
}

/// Exit code of a finished child
///
/// A child killed by a signal reports `128 + signal`, the way a shell does.
#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    status
        .code()
        .or_else(|| status.signal().map(|signal| 128 + signal))
        .unwrap_or(1)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
