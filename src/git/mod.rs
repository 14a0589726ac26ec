//! Git operations used by the merge workflow
//!
//! [`Git`] turns the handful of git invocations the workflow needs into
//! typed calls. Mutating commands go through the injected
//! [`CommandExecutor`]; ancestry questions go to the [`AncestryOracle`].
//!
//! Two flavors of call:
//! - `try_*` methods return whether the command succeeded, for steps whose
//!   failure the caller handles (merges, probes).
//! - the rest fail the run with [`Error::Vcs`] on a non-zero exit.

mod ancestry;

pub use ancestry::{AncestryOracle, GitAncestry};

use crate::error::{Error, Result};
use crate::exec::{CommandExecutor, display_command};

/// Typed git commands over an executor and an ancestry oracle
pub struct Git<'a> {
    executor: &'a dyn CommandExecutor,
    ancestry: &'a dyn AncestryOracle,
}

impl<'a> Git<'a> {
    /// Wrap an executor and oracle
    pub fn new(executor: &'a dyn CommandExecutor, ancestry: &'a dyn AncestryOracle) -> Self {
        Self { executor, ancestry }
    }

    /// The underlying executor, for non-git commands such as the build
    pub fn executor(&self) -> &'a dyn CommandExecutor {
        self.executor
    }

    async fn status(&self, args: &[&str]) -> Result<i32> {
        let mut command = Vec::with_capacity(args.len() + 1);
        command.push("git");
        command.extend_from_slice(args);
        self.executor.run(&command, true).await
    }

    async fn succeeds(&self, args: &[&str]) -> Result<bool> {
        Ok(self.status(args).await? == 0)
    }

    async fn checked(&self, args: &[&str]) -> Result<()> {
        let code = self.status(args).await?;
        if code == 0 {
            Ok(())
        } else {
            let mut command = vec!["git"];
            command.extend_from_slice(args);
            Err(Error::Vcs {
                command: display_command(&command),
                code,
            })
        }
    }

    /// `git checkout <branch>`
    pub async fn checkout(&self, branch: &str) -> Result<()> {
        self.checked(&["checkout", branch]).await
    }

    /// `git checkout -B <branch>`: create or reset `branch` at HEAD and switch to it
    pub async fn checkout_reset(&self, branch: &str) -> Result<()> {
        self.checked(&["checkout", "-B", branch]).await
    }

    /// `git fetch <remote> <refspec>`
    pub async fn fetch(&self, remote: &str, refspec: &str) -> Result<()> {
        self.checked(&["fetch", remote, refspec]).await
    }

    /// `git fetch <remote> <refspec>`, reporting failure instead of erroring
    pub async fn try_fetch(&self, remote: &str, refspec: &str) -> Result<bool> {
        self.succeeds(&["fetch", remote, refspec]).await
    }

    /// `git reset --hard <reference>`
    pub async fn reset_hard(&self, reference: &str) -> Result<()> {
        self.checked(&["reset", "--hard", reference]).await
    }

    /// Whether `reference` resolves to a commit
    pub async fn try_verify(&self, reference: &str) -> Result<bool> {
        self.succeeds(&["rev-parse", "--verify", "--quiet", reference])
            .await
    }

    /// `git merge --no-edit <branch>`, committing on success
    pub async fn try_merge(&self, branch: &str) -> Result<bool> {
        self.succeeds(&["merge", "--no-edit", branch]).await
    }

    /// `git merge --no-commit --no-ff <branch>`, leaving the merge staged
    pub async fn try_merge_staged(&self, branch: &str) -> Result<bool> {
        self.succeeds(&["merge", "--no-commit", "--no-ff", branch])
            .await
    }

    /// `git merge --abort`
    ///
    /// Fails when there is no merge in progress, in which case there is
    /// nothing to roll back.
    pub async fn try_merge_abort(&self) -> Result<bool> {
        self.succeeds(&["merge", "--abort"]).await
    }

    /// `git commit -m <message>`
    pub async fn commit(&self, message: &str) -> Result<()> {
        self.checked(&["commit", "-m", message]).await
    }

    /// `git commit --allow-empty -m <message>`
    pub async fn commit_empty(&self, message: &str) -> Result<()> {
        self.checked(&["commit", "--allow-empty", "-m", message])
            .await
    }

    /// Whether `ancestor` is already contained in `descendant`
    pub async fn is_ancestor(&self, ancestor: &str, descendant: &str) -> bool {
        self.ancestry.is_ancestor(ancestor, descendant).await
    }
}
