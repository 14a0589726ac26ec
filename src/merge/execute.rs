//! Merge execution - effectful operations
//!
//! This module contains the effectful code that actually performs merges.
//! It takes a `MergePlan` (created by the pure planning function) and runs
//! each step through git and the build check, folding the outcomes into a
//! `MergeReport`.

use crate::error::Result;
use crate::exec::{CommandExecutor, display_command};
use crate::git::Git;
use crate::merge::plan::{MergePlan, MergeStep};
use crate::progress::ProgressCallback;
use crate::report::MergeReport;
use crate::types::{BuildSettings, FailureReason, MergeOutcome};
use tracing::{Instrument, info, info_span, warn};

/// Run the build check, returning whether it passed
pub async fn run_build(executor: &dyn CommandExecutor, build: &BuildSettings) -> Result<bool> {
    let command: Vec<&str> = build.command.iter().map(String::as_str).collect();
    info!("Testing {}", display_command(&command));
    Ok(executor.run(&command, build.show_output).await? == 0)
}

/// Process a single PR (EFFECTFUL)
///
/// Fetch, skip if already contained in the target, merge without
/// committing, build, then commit. A failed merge or build is aborted so the
/// next PR starts from a clean tree, and comes back as
/// `MergeOutcome::Failed`. `Err` is reserved for failures that end the run.
pub async fn merge_pr(
    step: &MergeStep,
    plan: &MergePlan,
    remote: &str,
    build: &BuildSettings,
    git: &Git<'_>,
) -> Result<MergeOutcome> {
    let pr = step.pr_number;
    info!("Merging PR #{pr}");

    if !git.try_fetch(remote, &step.refspec).await? {
        warn!("Could not fetch PR #{pr} from {remote}");
        return Ok(MergeOutcome::Failed(FailureReason::FetchFailed));
    }

    if git.is_ancestor(&step.branch, &plan.target_branch).await {
        info!("PR #{pr} already merged");
        return Ok(MergeOutcome::AlreadyMerged);
    }

    if !git.try_merge_staged(&step.branch).await? {
        roll_back(git, step).await?;
        return Ok(MergeOutcome::Failed(FailureReason::MergeFailed));
    }

    if !run_build(git.executor(), build).await? {
        roll_back(git, step).await?;
        return Ok(MergeOutcome::Failed(FailureReason::BuildFailed));
    }

    git.commit(&step.commit_message()).await?;
    info!("Merged PR #{pr}");
    Ok(MergeOutcome::Merged)
}

async fn roll_back(git: &Git<'_>, step: &MergeStep) -> Result<()> {
    if !git.try_merge_abort().await? {
        warn!(
            "git merge --abort failed for PR #{}; no merge was in progress",
            step.pr_number
        );
    }
    Ok(())
}

/// Execute the merge plan (EFFECTFUL)
///
/// Every step runs to an outcome; a failed PR never stops the ones after it.
/// Only fatal errors (setup commands, commits, interruption) end the loop
/// early.
///
/// # Returns
/// A `MergeReport` with exactly one outcome per planned PR
pub async fn execute_merge(
    plan: &MergePlan,
    remote: &str,
    build: &BuildSettings,
    git: &Git<'_>,
    progress: &dyn ProgressCallback,
) -> Result<MergeReport> {
    let mut report = MergeReport::new();

    if !plan.is_empty() {
        progress
            .on_message(&format!(
                "Merging {} PR(s) into {}",
                plan.len(),
                plan.target_branch
            ))
            .await;
    }

    for step in &plan.steps {
        progress.on_pr_started(step.pr_number).await;

        let span = info_span!("pr", number = step.pr_number.get());
        let outcome = merge_pr(step, plan, remote, build, git)
            .instrument(span)
            .await?;

        if let MergeOutcome::Failed(reason) = outcome {
            warn!("Could not {step}: {reason}");
        }
        progress.on_pr_finished(step.pr_number, &outcome).await;
        report.record(step.pr_number, outcome)?;
    }

    if report.has_failures() {
        warn!("The following PRs failed");
        for (pr, reason) in report.failed() {
            warn!("\tPR #{pr}: {reason}");
        }
    }

    Ok(report)
}
