//! Throwaway git repositories for end-to-end tests
//!
//! Layout inside one temp dir:
//! - `remote.git`: bare repository acting as `origin`
//! - `seed`: scratch clone used to publish base commits and PR heads
//! - `local`: the clone premerge operates on
//!
//! PR heads are pushed to `refs/pull/<n>/head`, the same place GitHub
//! exposes them.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Bare remote plus two clones
pub struct TempGitRepo {
    _dir: TempDir,
    seed: PathBuf,
    local: PathBuf,
}

fn git_in(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {} failed in {}: {}",
        args.join(" "),
        dir.display(),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn configure_identity(dir: &Path) {
    git_in(dir, &["config", "user.email", "test@test.com"]);
    git_in(dir, &["config", "user.name", "Test User"]);
    git_in(dir, &["config", "commit.gpgsign", "false"]);
}

impl TempGitRepo {
    /// Create the remote with an initial commit on `master`, and clone it
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let remote = dir.path().join("remote.git");
        let seed = dir.path().join("seed");
        let local = dir.path().join("local");

        fs::create_dir_all(&remote).unwrap();
        git_in(&remote, &["init", "--bare", "--quiet"]);
        git_in(&remote, &["symbolic-ref", "HEAD", "refs/heads/master"]);

        fs::create_dir_all(&seed).unwrap();
        git_in(&seed, &["init", "--quiet"]);
        git_in(&seed, &["symbolic-ref", "HEAD", "refs/heads/master"]);
        configure_identity(&seed);
        fs::write(seed.join("README"), "base\n").unwrap();
        fs::write(seed.join("shared.txt"), "original line\n").unwrap();
        git_in(&seed, &["add", "."]);
        git_in(&seed, &["commit", "--quiet", "-m", "Initial commit"]);
        git_in(
            &seed,
            &["remote", "add", "origin", &remote.to_string_lossy()],
        );
        git_in(&seed, &["push", "--quiet", "origin", "master"]);

        git_in(
            dir.path(),
            &[
                "clone",
                "--quiet",
                &remote.to_string_lossy(),
                &local.to_string_lossy(),
            ],
        );
        configure_identity(&local);

        Self {
            _dir: dir,
            seed,
            local,
        }
    }

    /// The clone premerge runs in
    pub fn path(&self) -> &Path {
        &self.local
    }

    /// Publish PR `number` as one commit on top of `master` writing `file`
    pub fn publish_pr(&self, number: u64, file: &str, contents: &str) {
        let branch = format!("pr-src-{number}");
        git_in(&self.seed, &["checkout", "--quiet", "-B", &branch, "master"]);
        fs::write(self.seed.join(file), contents).unwrap();
        git_in(&self.seed, &["add", file]);
        git_in(
            &self.seed,
            &["commit", "--quiet", "-m", &format!("Change for PR {number}")],
        );
        git_in(
            &self.seed,
            &[
                "push",
                "--quiet",
                "--force",
                "origin",
                &format!("HEAD:refs/pull/{number}/head"),
            ],
        );
        git_in(&self.seed, &["checkout", "--quiet", "master"]);
    }

    /// Commit `file` directly on the local `master`, without pushing
    pub fn commit_on_local_master(&self, file: &str, contents: &str) {
        git_in(&self.local, &["checkout", "--quiet", "master"]);
        fs::write(self.local.join(file), contents).unwrap();
        git_in(&self.local, &["add", file]);
        git_in(&self.local, &["commit", "--quiet", "-m", "Local base change"]);
    }

    /// Run git in the local clone and return stdout
    pub fn git(&self, args: &[&str]) -> String {
        git_in(&self.local, args)
    }

    /// Whether `git <args>` exits zero in the local clone
    pub fn git_succeeds(&self, args: &[&str]) -> bool {
        Command::new("git")
            .args(args)
            .current_dir(&self.local)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    /// Full message of the tip commit of `branch`
    pub fn tip_message(&self, branch: &str) -> String {
        self.git(&["log", "-1", "--format=%B", branch])
    }

    /// Subjects of the commits on `branch`, newest first
    pub fn subjects(&self, branch: &str) -> Vec<String> {
        self.git(&["log", "--format=%s", branch])
            .lines()
            .map(String::from)
            .collect()
    }

    /// Current branch name
    pub fn current_branch(&self) -> String {
        self.git(&["rev-parse", "--abbrev-ref", "HEAD"])
            .trim()
            .to_string()
    }

    /// Check if the working tree has no changes (untracked files included)
    pub fn is_clean(&self) -> bool {
        self.git(&["status", "--porcelain"]).trim().is_empty()
    }
}
