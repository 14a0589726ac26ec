//! Merge command - assemble the target branch from the requested PRs

use crate::cli::CliProgress;
use crate::cli::context::CommandContext;
use crate::cli::style::{Stylize, check};
use anstream::println;
use premerge::error::Result;
use premerge::merge::{create_merge_plan, execute_merge};
use premerge::prepare::{TargetStart, prepare_target};
use premerge::report::{MergeReport, commit_report};
use premerge::types::Session;

/// Run the merge command
pub async fn run_merge(ctx: &CommandContext) -> Result<()> {
    let session = &ctx.session;
    let git = ctx.git();

    // =========================================================================
    // Phase 1: PREPARE - position the target branch
    // =========================================================================

    println!(
        "{} {} {}",
        "Preparing".emphasis(),
        session.target.accent(),
        format!("from {}", session.remote_base()).muted()
    );
    let start = prepare_target(session, &git).await?;
    if start == TargetStart::Recreated {
        println!("  {}", format!("Recreated {}", session.target).muted());
    }

    // =========================================================================
    // Phase 2: PLAN - pure ordering
    // =========================================================================

    let plan = create_merge_plan(&session.prs, &session.target);
    if plan.is_empty() {
        println!("{}", "No PRs requested.".muted());
    }

    // =========================================================================
    // Phase 3: EXECUTE - merge, build, commit or roll back
    // =========================================================================

    let progress = CliProgress;
    let report = execute_merge(&plan, &session.remote, &session.build, &git, &progress).await?;

    // =========================================================================
    // Phase 4: REPORT
    // =========================================================================

    let committed = commit_report(&report, &session.prs, &git).await?;
    print_merge_summary(session, &report, committed);

    Ok(())
}

/// Print merge summary
fn print_merge_summary(session: &Session, report: &MergeReport, committed: bool) {
    println!();
    if report.has_failures() {
        println!(
            "{} {} ready with failures",
            "⚠️".warn(),
            session.target.accent()
        );
    } else {
        println!("{} {} ready", check(), session.target.accent());
    }

    println!(
        "   Merged: {}, already merged: {}, failed: {}",
        report.merged_count().accent(),
        report.already_merged_count().accent(),
        report.failed().len().warn()
    );

    for (pr, reason) in report.failed() {
        println!("   {} {}", format!("#{pr}:").warn(), reason.muted());
    }

    if committed {
        println!(
            "   {}",
            format!("Report committed to {}", session.target).muted()
        );
    }
    if session.dry_run {
        println!("{}", "Dry run complete, no commands were executed.".muted());
    }
}
