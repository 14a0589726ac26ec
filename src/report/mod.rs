//! Outcome aggregation and the pre-release report commit

mod aggregate;
mod render;

pub use aggregate::MergeReport;
pub use render::{commit_report, render_report};
