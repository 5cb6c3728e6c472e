//! Shepherd — keep tracked files in forked repositories aligned with their
//! canonical references.
//!
//! # Usage
//!
//! ```text
//! shepherd [--na] [--lf <file>] [--ll <level>] [--la <bool>] [-v]... [--cf]
//! ```
//!
//! For every repository in the bundled manifest: clone the fork, reset it to
//! the upstream default branch, diff `tox.ini` against the canonical copy,
//! and on divergence interactively branch, commit, push, and open a PR.

mod logging;

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use colored::Colorize;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

use shepherd_core::{manifest, RepoName, Session};
use shepherd_exec::ShellRunner;
use shepherd_recon::{checks, clone_all, CheckOutcome};
use shepherd_term::{TermFeatures, TerminalPrompt};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "shepherd",
    version,
    about = "Reconcile tracked files across forked repositories",
    long_about = None,
)]
struct Cli {
    /// Disable the use of ANSI codes for terminal color.
    #[arg(long = "no-ansi", visible_alias = "na")]
    no_ansi: bool,

    /// Log file to write to.
    #[arg(long = "log-file", visible_alias = "lf", default_value = "./shepherd.log")]
    log_file: PathBuf,

    /// Log level for file output ('notset' disables the file log).
    #[arg(
        long = "log-level",
        visible_alias = "ll",
        value_enum,
        default_value = "notset"
    )]
    log_level: LogLevel,

    /// Append to the log file instead of truncating it.
    #[arg(
        long = "log-append",
        visible_alias = "la",
        action = ArgAction::Set,
        default_value_t = true
    )]
    log_append: bool,

    /// Give more CLI output. Additive, and can be used up to 3 times.
    #[arg(short = 'v', action = ArgAction::Count)]
    verbose: u8,

    /// Ensure each repository is forked before cloning.
    #[arg(long = "check-forks", visible_alias = "cf")]
    check_forks: bool,
}

/// File log level choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Notset,
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    fn to_filter(self) -> Option<LevelFilter> {
        match self {
            LogLevel::Notset => None,
            LogLevel::Debug => Some(LevelFilter::DEBUG),
            LogLevel::Info => Some(LevelFilter::INFO),
            LogLevel::Warning => Some(LevelFilter::WARN),
            LogLevel::Error | LogLevel::Critical => Some(LevelFilter::ERROR),
        }
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();

    let color = env::var_os("NO_COLOR").is_none() && !cli.no_ansi;
    let features = TermFeatures::new(color, !cli.no_ansi);
    if !features.color {
        colored::control::set_override(false);
    }

    // argparse-style count: the baseline is 1, each -v adds one
    let verbosity = cli.verbose.saturating_add(1);
    logging::init(
        &cli.log_file,
        cli.log_level.to_filter(),
        cli.log_append,
        verbosity,
        features.color,
    )?;

    let repos = manifest::bundled().context("failed to load the bundled repository manifest")?;

    let scratch_dir = tempfile::Builder::new()
        .prefix("shepherd-")
        .tempdir()
        .context("failed to create the scratch directory")?
        .keep();
    info!("Using temporary directory {}", scratch_dir.display());

    let editor = env::var("EDITOR").unwrap_or_else(|_| "vi".to_owned());
    let mut session = Session::new(
        editor.clone(),
        scratch_dir,
        verbosity,
        cli.check_forks,
        repos,
    );
    info!("The current session ID is {}.", session.session_id);

    let runner = ShellRunner::new(verbosity, features);
    let mut prompt = TerminalPrompt::new(editor);

    clone_all(&mut session, &runner).context("cloning the configured repositories failed")?;
    let outcomes = checks::tracked_file::run(&checks::TOX_INI, &session, &runner, &mut prompt)
        .context("the tox.ini check failed")?;

    print_summary(&outcomes);
    Ok(())
}

fn print_summary(outcomes: &[(RepoName, CheckOutcome)]) {
    for (name, outcome) in outcomes {
        let marker = match outcome {
            CheckOutcome::InSync | CheckOutcome::Updated => "✓".green(),
            CheckOutcome::Declined | CheckOutcome::NoMessage => "·".yellow(),
        };
        println!("{marker} '{name}' — {outcome}");
    }
}
