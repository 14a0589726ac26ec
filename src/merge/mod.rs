//! PR merge engine
//!
//! Two-phase pattern:
//! 1. Plan - order the requested PRs into `MergePlan` steps (pure, testable)
//! 2. Execute - fetch, merge, build, commit or roll back each step (effectful)

mod execute;
mod plan;

pub use execute::{execute_merge, merge_pr, run_build};
pub use plan::{MergePlan, MergeStep, create_merge_plan};
