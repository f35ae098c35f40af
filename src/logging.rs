//! Tracing subscriber setup for the binaries.
//!
//! The full-screen UI owns the terminal, so it only logs when given a file.
//! The console front end logs to stderr.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a subscriber writing to stderr, filtered by `filter` (e.g. "info").
pub fn init_stderr(filter: &str) -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(filter).with_context(|| format!("bad log filter {filter:?}"))?)
        .with(fmt::layer().with_writer(io::stderr))
        .try_init()?;
    Ok(())
}

/// Install a subscriber appending plain-text events to `path`.
pub fn init_file(filter: &str, path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(filter).with_context(|| format!("bad log filter {filter:?}"))?)
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .try_init()?;
    Ok(())
}
