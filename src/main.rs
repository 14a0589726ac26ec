//! premerge CLI entry point

mod cli;

use anyhow::Context;
use clap::{ArgAction, Parser};
use cli::context::{CliOptions, CommandContext};
use cli::style::Stylize;
use premerge::types::PrNumber;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "premerge",
    version,
    about = "Assemble a pre-release branch by merging pull requests one at a time"
)]
struct Cli {
    /// Log commands instead of executing them
    #[arg(long)]
    dryrun: bool,

    /// Recreate the target branch from the remote base branch
    #[arg(long)]
    fresh: bool,

    /// Remote to use [default: origin]
    #[arg(short, long)]
    remote: Option<String>,

    /// Base branch [default: master]
    #[arg(short, long)]
    base: Option<String>,

    /// Target branch [default: dev]
    #[arg(short, long)]
    target: Option<String>,

    /// Repository to operate in
    #[arg(short = 'C', long, default_value = ".")]
    path: PathBuf,

    /// Build command gating each merge [default: ./gradlew build]
    #[arg(long, value_name = "CMD")]
    build_command: Option<String>,

    /// Config file to use instead of <path>/.premerge.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// PRs to be merged into the target branch
    #[arg(value_name = "PR_NUM")]
    prs: Vec<PrNumber>,
}

fn init_tracing(verbose: u8) {
    let default_directive = match verbose {
        0 => "premerge=info",
        1 => "premerge=debug",
        _ => "premerge=trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let options = CliOptions {
        dry_run: cli.dryrun,
        fresh: cli.fresh,
        remote: cli.remote,
        base: cli.base,
        target: cli.target,
        path: cli.path,
        build_command: cli.build_command,
        config: cli.config,
        prs: cli.prs,
    };

    let ctx = CommandContext::new(options).context("failed to set up session")?;
    cli::merge::run_merge(&ctx)
        .await
        .context("pre-release merge aborted")?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Covers the stretches where no command is being awaited. Dropping the
    // run kills any child still attached to it.
    let result = tokio::select! {
        result = run(cli) => result,
        Ok(()) = tokio::signal::ctrl_c() => Err(anyhow::anyhow!("interrupted")),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            anstream::eprintln!("{} {e:#}", "Error:".error());
            ExitCode::FAILURE
        }
    }
}
