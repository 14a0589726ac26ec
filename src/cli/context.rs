//! Shared command context for the CLI
//!
//! Turns parsed arguments plus config files into an immutable `Session`
//! and picks the executor and ancestry oracle for it.

use premerge::config::{
    Config, ConfigFile, load_config_file, parse_build_command, repo_config_path, user_config_path,
};
use premerge::error::{Error, Result};
use premerge::exec::{CommandExecutor, DryRunExecutor, SystemExecutor};
use premerge::git::{AncestryOracle, Git, GitAncestry};
use premerge::types::{PrNumber, Session};
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::debug;

/// Values taken from the command line
#[derive(Debug, Clone, Default)]
pub struct CliOptions {
    /// Log commands instead of running them
    pub dry_run: bool,
    /// Recreate the target branch
    pub fresh: bool,
    /// Remote override
    pub remote: Option<String>,
    /// Base branch override
    pub base: Option<String>,
    /// Target branch override
    pub target: Option<String>,
    /// Repository directory
    pub path: PathBuf,
    /// Build command override, whitespace separated
    pub build_command: Option<String>,
    /// Explicit config file, replacing the repository one
    pub config: Option<PathBuf>,
    /// Requested PRs
    pub prs: Vec<PrNumber>,
}

/// Everything a run needs
pub struct CommandContext {
    /// Immutable session settings
    pub session: Session,
    /// Executor for every mutating command
    pub executor: Box<dyn CommandExecutor>,
    /// Ancestry oracle (always real; it only reads)
    pub ancestry: Box<dyn AncestryOracle>,
}

impl CommandContext {
    /// Build the session from CLI options and config files
    pub fn new(options: CliOptions) -> Result<Self> {
        if !options.path.is_dir() {
            return Err(Error::Config(format!(
                "repository path {} is not a directory",
                options.path.display()
            )));
        }

        let config = resolve_config(&options)?;
        debug!(?config, "resolved configuration");

        let prs: BTreeSet<PrNumber> = options.prs.into_iter().collect();
        let session = Session {
            remote: config.remote,
            base: config.base,
            target: config.target,
            fresh: options.fresh,
            dry_run: options.dry_run,
            prs,
            build: config.build,
            repo_path: options.path,
        };

        let executor: Box<dyn CommandExecutor> = if session.dry_run {
            Box::new(DryRunExecutor)
        } else {
            Box::new(SystemExecutor::in_dir(&session.repo_path))
        };
        let ancestry = Box::new(GitAncestry::in_dir(&session.repo_path));

        Ok(Self {
            session,
            executor,
            ancestry,
        })
    }

    /// Git facade over this context's executor and oracle
    pub fn git(&self) -> Git<'_> {
        Git::new(self.executor.as_ref(), self.ancestry.as_ref())
    }
}

fn resolve_config(options: &CliOptions) -> Result<Config> {
    let user = match user_config_path() {
        Some(path) => load_config_file(&path)?,
        None => ConfigFile::default(),
    };

    let repo = match options.config {
        Some(ref path) if !path.exists() => {
            return Err(Error::Config(format!(
                "config file {} not found",
                path.display()
            )));
        }
        Some(ref path) => load_config_file(path)?,
        None => load_config_file(&repo_config_path(&options.path))?,
    };

    let mut cli = ConfigFile {
        remote: options.remote.clone(),
        base: options.base.clone(),
        target: options.target.clone(),
        ..ConfigFile::default()
    };
    if let Some(ref raw) = options.build_command {
        cli.build.command = Some(parse_build_command(raw));
    }

    Config::resolve(user.layer(repo).layer(cli))
}
