//! Ancestry queries

use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Answers "is `ancestor` reachable from `descendant`?"
#[async_trait]
pub trait AncestryOracle: Send + Sync {
    /// `true` if every commit of `ancestor` is already in `descendant`
    ///
    /// Never fails: any error while asking is answered with `false`.
    async fn is_ancestor(&self, ancestor: &str, descendant: &str) -> bool;
}

/// Oracle backed by `git merge-base --is-ancestor`
///
/// Read-only, so it runs even in dry-run mode.
#[derive(Debug, Clone, Default)]
pub struct GitAncestry {
    cwd: Option<PathBuf>,
}

impl GitAncestry {
    /// Oracle for the repository in the current directory
    pub const fn new() -> Self {
        Self { cwd: None }
    }

    /// Oracle for the repository at `dir`
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            cwd: Some(dir.into()),
        }
    }
}

#[async_trait]
impl AncestryOracle for GitAncestry {
    async fn is_ancestor(&self, ancestor: &str, descendant: &str) -> bool {
        let mut cmd = Command::new("git");
        cmd.args(["merge-base", "--is-ancestor", ancestor, descendant])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);
        if let Some(ref dir) = self.cwd {
            cmd.current_dir(dir);
        }

        let answer = match cmd.status().await {
            Ok(status) => status.success(),
            Err(e) => {
                debug!(error = %e, "git merge-base could not be run");
                false
            }
        };
        debug!(ancestor, descendant, answer, "ancestry check");
        answer
    }
}
