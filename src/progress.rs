//! Progress reporting during a merge run

use crate::types::{MergeOutcome, PrNumber};
use async_trait::async_trait;

/// Observer for merge progress
///
/// The CLI prints these; tests record them.
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// A PR is about to be processed
    async fn on_pr_started(&self, pr: PrNumber);

    /// A PR reached its outcome
    async fn on_pr_finished(&self, pr: PrNumber, outcome: &MergeOutcome);

    /// Free-form status message
    async fn on_message(&self, message: &str);
}

/// Progress callback that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_pr_started(&self, _pr: PrNumber) {}

    async fn on_pr_finished(&self, _pr: PrNumber, _outcome: &MergeOutcome) {}

    async fn on_message(&self, _message: &str) {}
}
