//! Error types for premerge

use crate::types::PrNumber;
use thiserror::Error;

/// Errors that abort a run
///
/// Per-PR merge and build failures are not errors: they are recorded as
/// [`MergeOutcome::Failed`](crate::types::MergeOutcome::Failed) and the run
/// continues. Everything in this enum is fatal and ends the process with
/// exit code 1.
#[derive(Error, Debug)]
pub enum Error {
    /// A git command needed to set up or finalize the branch exited non-zero
    #[error("`{command}` exited with status {code}")]
    Vcs {
        /// The command line that failed
        command: String,
        /// Its exit status
        code: i32,
    },

    /// Merging the base branch into the target branch conflicted
    #[error("failed to merge {base} into {target}")]
    BaseMergeConflict {
        /// Base branch name
        base: String,
        /// Target branch name
        target: String,
    },

    /// Waiting on a command was interrupted
    #[error("interrupted while waiting for `{0}` to complete")]
    Interrupted(String),

    /// A command could not be started at all
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        /// The command line that could not be started
        command: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid or unreadable configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// A PR number argument that is not a positive integer
    #[error("invalid PR number '{0}': expected a positive integer")]
    InvalidPrNumber(String),

    /// An outcome was recorded twice for the same PR
    #[error("PR #{0} already has a recorded outcome")]
    DuplicateOutcome(PrNumber),
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
