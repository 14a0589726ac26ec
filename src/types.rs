//! Core types for premerge

use crate::error::Error;
use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// A pull request number
///
/// Always positive. Ordering is numeric, which is what the report relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PrNumber(u64);

impl PrNumber {
    /// Create a PR number, rejecting zero
    pub const fn new(n: u64) -> Option<Self> {
        if n == 0 { None } else { Some(Self(n)) }
    }

    /// The raw number
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Name of the local branch the PR head is fetched into
    pub fn branch_name(self) -> String {
        format!("pr-{}", self.0)
    }

    /// Refspec that fetches the PR head into [`branch_name`](Self::branch_name)
    ///
    /// Forced (`+`) so a force-pushed PR replaces a stale local branch.
    pub fn fetch_refspec(self) -> String {
        format!("+pull/{}/head:{}", self.0, self.branch_name())
    }
}

impl fmt::Display for PrNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PrNumber {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('#');
        trimmed
            .parse::<u64>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| Error::InvalidPrNumber(s.to_string()))
    }
}

/// Why a PR could not be merged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// The PR head could not be fetched from the remote
    FetchFailed,
    /// `git merge` reported a conflict or other failure
    MergeFailed,
    /// The merge applied cleanly but the build check failed
    BuildFailed,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FetchFailed => write!(f, "Failed to fetch"),
            Self::MergeFailed => write!(f, "Failed to merge"),
            Self::BuildFailed => write!(f, "Build failed"),
        }
    }
}

/// How a successful PR ended up in the target branch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeStatus {
    /// Already an ancestor of the target; nothing was done
    AlreadyMerged,
    /// Merged, built and committed in this run
    Merged,
}

impl fmt::Display for MergeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyMerged => write!(f, "Already Merged"),
            Self::Merged => write!(f, "Merged"),
        }
    }
}

/// Result of processing one PR
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The PR was already contained in the target branch
    AlreadyMerged,
    /// The PR was merged and committed
    Merged,
    /// The PR was rolled back
    Failed(FailureReason),
}

/// Build check settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSettings {
    /// Program followed by its arguments
    pub command: Vec<String>,
    /// Bind the build's standard streams to the terminal
    pub show_output: bool,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            command: vec!["./gradlew".to_string(), "build".to_string()],
            show_output: false,
        }
    }
}

/// Everything one run needs to know, fixed at startup
#[derive(Debug, Clone)]
pub struct Session {
    /// Remote to fetch from
    pub remote: String,
    /// Branch the target is derived from
    pub base: String,
    /// Integration branch being assembled
    pub target: String,
    /// Recreate the target from the remote base instead of reusing it
    pub fresh: bool,
    /// Log commands instead of running them
    pub dry_run: bool,
    /// PRs to merge
    pub prs: BTreeSet<PrNumber>,
    /// Build check
    pub build: BuildSettings,
    /// Repository working directory
    pub repo_path: PathBuf,
}

impl Session {
    /// `<remote>/<base>`, the ref a fresh target starts from
    pub fn remote_base(&self) -> String {
        format!("{}/{}", self.remote, self.base)
    }
}
