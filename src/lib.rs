//! premerge: assemble a pre-release integration branch from pull requests
//!
//! The target branch is positioned relative to the base branch, then each
//! requested PR is fetched, merged without committing, gated on a build,
//! and committed or rolled back. A report of what merged and what failed is
//! committed at the end.
//!
//! Module map:
//! - [`prepare`] positions the target branch
//! - [`merge`] plans and executes the per-PR merges
//! - [`report`] aggregates outcomes and writes the report commit
//! - [`exec`] and [`git`] are the command-execution seams

pub mod config;
pub mod error;
pub mod exec;
pub mod git;
pub mod merge;
pub mod prepare;
pub mod progress;
pub mod report;
pub mod types;
