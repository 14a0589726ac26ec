//! Merge planning - pure functions for ordering PR merges
//!
//! No I/O happens here. The plan fixes the processing order and the local
//! branch and refspec for each PR, so execution only has to follow it.

use crate::types::PrNumber;
use std::collections::BTreeSet;

/// A single PR to merge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeStep {
    /// PR number
    pub pr_number: PrNumber,
    /// Local branch the PR head is fetched into (`pr-<n>`)
    pub branch: String,
    /// Refspec passed to `git fetch`
    pub refspec: String,
}

impl MergeStep {
    /// Step for one PR
    pub fn new(pr_number: PrNumber) -> Self {
        Self {
            pr_number,
            branch: pr_number.branch_name(),
            refspec: pr_number.fetch_refspec(),
        }
    }

    /// Commit message used when the merge is finalized
    pub fn commit_message(&self) -> String {
        format!("Merge {}", self.branch)
    }
}

impl std::fmt::Display for MergeStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "merge PR #{} ({})", self.pr_number, self.branch)
    }
}

/// Merge plan - the functional core output
///
/// Created by `create_merge_plan()` (pure) and executed by
/// `execute_merge()` (effectful).
#[derive(Debug, Clone)]
pub struct MergePlan {
    /// Steps in processing order (highest PR number first)
    pub steps: Vec<MergeStep>,
    /// Branch the PRs are merged into
    pub target_branch: String,
}

impl MergePlan {
    /// Check if there is nothing to merge
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of PRs in the plan
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// PR numbers in processing order
    pub fn pr_numbers(&self) -> impl Iterator<Item = PrNumber> + '_ {
        self.steps.iter().map(|s| s.pr_number)
    }
}

/// Create a merge plan (PURE - no I/O, easily testable)
///
/// PRs are processed newest first: descending numeric order. The set already
/// collapses duplicates.
#[must_use]
pub fn create_merge_plan(prs: &BTreeSet<PrNumber>, target_branch: &str) -> MergePlan {
    MergePlan {
        steps: prs.iter().rev().copied().map(MergeStep::new).collect(),
        target_branch: target_branch.to_string(),
    }
}
