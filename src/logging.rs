//! Tracing subscriber setup.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::settings::LogSettings;

/// Where log output ends up for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    File,
    Stderr,
    Disabled,
}

/// Pick a log target. The interactive TUI owns the terminal, so without a
/// log file it stays silent.
pub fn target(settings: &LogSettings, interactive: bool) -> LogTarget {
    match (&settings.file, interactive) {
        (Some(_), _) => LogTarget::File,
        (None, false) => LogTarget::Stderr,
        (None, true) => LogTarget::Disabled,
    }
}

fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber.
pub fn init(settings: &LogSettings, interactive: bool) -> Result<LogTarget> {
    let target = target(settings, interactive);
    let builder = tracing_subscriber::fmt().with_env_filter(filter(&settings.level));

    let installed = match (target, &settings.file) {
        (LogTarget::File, Some(path)) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
        (LogTarget::Stderr, _) => builder.with_writer(std::io::stderr).try_init(),
        _ => return Ok(LogTarget::Disabled),
    };
    installed.map_err(|e| anyhow::anyhow!("failed to install log subscriber: {}", e))?;

    Ok(target)
}
