//! Per-PR outcome aggregation

use crate::error::{Error, Result};
use crate::types::{FailureReason, MergeOutcome, MergeStatus, PrNumber};
use std::collections::{BTreeMap, BTreeSet};

/// Outcomes of one run, split into succeeded and failed
///
/// Each PR appears in exactly one of the two maps. Both iterate in ascending
/// PR order, whatever order the outcomes were recorded in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    succeeded: BTreeMap<PrNumber, MergeStatus>,
    failed: BTreeMap<PrNumber, FailureReason>,
}

impl MergeReport {
    /// Empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome for `pr`
    ///
    /// Fails if `pr` already has an outcome.
    pub fn record(&mut self, pr: PrNumber, outcome: MergeOutcome) -> Result<()> {
        if self.contains(pr) {
            return Err(Error::DuplicateOutcome(pr));
        }
        match outcome {
            MergeOutcome::AlreadyMerged => {
                self.succeeded.insert(pr, MergeStatus::AlreadyMerged);
            }
            MergeOutcome::Merged => {
                self.succeeded.insert(pr, MergeStatus::Merged);
            }
            MergeOutcome::Failed(reason) => {
                self.failed.insert(pr, reason);
            }
        }
        Ok(())
    }

    /// Whether `pr` has an outcome
    pub fn contains(&self, pr: PrNumber) -> bool {
        self.succeeded.contains_key(&pr) || self.failed.contains_key(&pr)
    }

    /// PRs now in the target branch, ascending
    pub const fn succeeded(&self) -> &BTreeMap<PrNumber, MergeStatus> {
        &self.succeeded
    }

    /// PRs that were rolled back, ascending
    pub const fn failed(&self) -> &BTreeMap<PrNumber, FailureReason> {
        &self.failed
    }

    /// Check if any PR failed
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    /// Number of PRs merged in this run
    pub fn merged_count(&self) -> usize {
        self.count_status(MergeStatus::Merged)
    }

    /// Number of PRs that were already in the target
    pub fn already_merged_count(&self) -> usize {
        self.count_status(MergeStatus::AlreadyMerged)
    }

    fn count_status(&self, status: MergeStatus) -> usize {
        self.succeeded.values().filter(|s| **s == status).count()
    }

    /// Check that the report covers exactly `requested`
    #[must_use]
    pub fn is_complete_for(&self, requested: &BTreeSet<PrNumber>) -> bool {
        self.succeeded.len() + self.failed.len() == requested.len()
            && requested.iter().all(|pr| self.contains(*pr))
    }
}
