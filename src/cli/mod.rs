//! CLI front end

pub mod context;
pub mod merge;
pub mod style;

use anstream::println;
use async_trait::async_trait;
use premerge::progress::ProgressCallback;
use premerge::types::{MergeOutcome, PrNumber};
use style::{Stylize, arrow, check, cross};

/// Progress callback that prints one line per PR event
#[derive(Debug, Clone, Copy, Default)]
pub struct CliProgress;

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_pr_started(&self, pr: PrNumber) {
        println!("{} PR {}", arrow(), format!("#{pr}").emphasis());
    }

    async fn on_pr_finished(&self, pr: PrNumber, outcome: &MergeOutcome) {
        match outcome {
            MergeOutcome::Merged => println!("  {} Merged PR #{pr}", check()),
            MergeOutcome::AlreadyMerged => {
                println!("  {}", format!("PR #{pr} already merged").muted());
            }
            MergeOutcome::Failed(reason) => {
                println!("  {} PR #{pr}: {}", cross(), reason.warn());
            }
        }
    }

    async fn on_message(&self, message: &str) {
        println!("{}", message.muted());
    }
}
