//! Dry-run executor

use super::{CommandExecutor, display_command};
use crate::error::Result;
use async_trait::async_trait;
use tracing::info;

/// Logs each command and reports success without running anything
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunExecutor;

#[async_trait]
impl CommandExecutor for DryRunExecutor {
    async fn run(&self, command: &[&str], _bind_stdio: bool) -> Result<i32> {
        info!("[Dry Run] Executing '{}'", display_command(command));
        Ok(0)
    }
}
