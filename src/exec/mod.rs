//! Command execution
//!
//! Every command the core runs goes through a [`CommandExecutor`]. Swapping
//! the executor is how dry runs and tests avoid touching a real repository.

mod dry_run;
mod system;

pub use dry_run::DryRunExecutor;
pub use system::SystemExecutor;

use crate::error::Result;
use async_trait::async_trait;

/// Runs external commands to completion
///
/// Commands run one at a time; callers await each before starting the next.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Run `command` (program followed by arguments) and return its exit status
    ///
    /// With `bind_stdio` the child shares this process's standard streams,
    /// otherwise they are discarded.
    ///
    /// A non-zero status is returned as `Ok`. `Err` means the command could
    /// not be run or was interrupted.
    async fn run(&self, command: &[&str], bind_stdio: bool) -> Result<i32>;
}

/// Render a command for logs and error messages
pub fn display_command(command: &[&str]) -> String {
    command.join(" ")
}
