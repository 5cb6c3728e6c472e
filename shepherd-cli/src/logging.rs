//! Tracing setup: a console layer on stderr plus an optional file layer.
//!
//! The console level follows the `-v` verbosity count (overridable via
//! `RUST_LOG`); the file layer exists only when a `--log-level` other than
//! `notset` was given, and never emits ANSI codes.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub fn init(
    log_file: &Path,
    file_level: Option<LevelFilter>,
    log_append: bool,
    verbosity: u8,
    ansi: bool,
) -> Result<()> {
    let console_default = match verbosity {
        0 | 1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(console_default));
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .compact()
        .with_filter(console_filter);

    match file_level {
        Some(level) => {
            let file = OpenOptions::new()
                .create(true)
                .write(true)
                .append(log_append)
                .truncate(!log_append)
                .open(log_file)
                .with_context(|| format!("failed to open log file {}", log_file.display()))?;
            let file_layer = fmt::layer()
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .with_filter(level);
            tracing_subscriber::registry()
                .with(console)
                .with(file_layer)
                .init();
        }
        None => {
            tracing_subscriber::registry().with(console).init();
        }
    }

    Ok(())
}
