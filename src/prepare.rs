//! Target branch preparation
//!
//! Runs once per session, before any PR is merged, and leaves the target
//! branch checked out and containing the base branch.

use crate::error::{Error, Result};
use crate::git::Git;
use crate::types::Session;
use tracing::{error, info};

/// How the target branch was positioned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetStart {
    /// Recreated from the freshly fetched remote base
    Recreated,
    /// Existing target reused with its merge history
    Reused,
}

/// Check out and position the target branch
///
/// 1. Check out the base branch and fetch it from the remote.
/// 2. With `--fresh`, or when the target does not resolve, hard-reset to
///    `<remote>/<base>` and force the target branch there. Otherwise check out
///    the existing target.
/// 3. If the base is not contained in the target, merge it in. A conflict
///    aborts that merge and fails the run.
pub async fn prepare_target(session: &Session, git: &Git<'_>) -> Result<TargetStart> {
    let base = session.base.as_str();
    let target = session.target.as_str();

    git.checkout(base).await?;
    git.fetch(&session.remote, base).await?;

    let start = if session.fresh || !git.try_verify(target).await? {
        let remote_base = session.remote_base();
        info!("Recreating {target} from {remote_base}");
        git.reset_hard(&remote_base).await?;
        git.checkout_reset(target).await?;
        TargetStart::Recreated
    } else {
        info!("Reusing existing {target}");
        git.checkout(target).await?;
        TargetStart::Reused
    };

    if !git.is_ancestor(base, target).await {
        info!("Merging {base} into {target}");
        if !git.try_merge(base).await? {
            error!("Error merging {base} into {target}");
            git.try_merge_abort().await?;
            return Err(Error::BaseMergeConflict {
                base: base.to_string(),
                target: target.to_string(),
            });
        }
    }

    Ok(start)
}
