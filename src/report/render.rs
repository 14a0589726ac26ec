//! Report rendering and persistence

use super::MergeReport;
use crate::error::Result;
use crate::git::Git;
use crate::types::{MergeStatus, PrNumber};
use std::collections::BTreeSet;
use std::fmt::Write;
use tracing::info;

/// Render the pre-release report
///
/// Merged PRs are listed as `#<n>`; PRs that were already in the target are
/// listed as a bare `<n>`. Failed PRs follow as `#<n>: <reason>`.
pub fn render_report(report: &MergeReport) -> String {
    let mut out = String::new();
    out.push_str("Pre Release Build\n");
    out.push_str("Merged PRs (no # means no changes):\n");
    for (pr, status) in report.succeeded() {
        match status {
            MergeStatus::Merged => {
                let _ = writeln!(out, "\t#{pr}");
            }
            MergeStatus::AlreadyMerged => {
                let _ = writeln!(out, "\t{pr}");
            }
        }
    }
    out.push_str("\n\n");
    out.push_str("Failed PRs:\n");
    for (pr, reason) in report.failed() {
        let _ = writeln!(out, "\t#{pr}: {reason}");
    }
    out
}

/// Persist the report as an empty commit on the current branch
///
/// Skipped entirely when no PRs were requested. Returns whether a commit was
/// made.
pub async fn commit_report(
    report: &MergeReport,
    requested: &BTreeSet<PrNumber>,
    git: &Git<'_>,
) -> Result<bool> {
    if requested.is_empty() {
        info!("No PRs requested, skipping report commit");
        return Ok(false);
    }
    git.commit_empty(&render_report(report)).await?;
    Ok(true)
}
