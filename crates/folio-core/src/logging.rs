//! Tracing subscriber setup.
//!
//! The TUI owns the terminal, so it logs to a daily-rolling file; CLI
//! subcommands log to stderr.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LoggingConfig;

const LOG_FILE_PREFIX: &str = "folio.log";

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sink {
    /// Daily-rolling file under the configured log directory.
    File,
    Stderr,
}

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over the configured level. For [`Sink::File`] the returned
/// guard must live for the rest of the process or buffered lines are lost.
///
/// # Errors
/// Returns an error if the log directory cannot be created, the configured
/// level is not a valid filter, or a subscriber is already installed.
pub fn init(config: &LoggingConfig, sink: Sink) -> Result<Option<WorkerGuard>> {
    let filter = build_filter(&config.level)?;

    match sink {
        Sink::Stderr => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
                .try_init()
                .context("install stderr logger")?;
            Ok(None)
        }
        Sink::File => {
            let dir = config.effective_directory();
            let guard = init_file(&dir, filter)?;
            Ok(Some(guard))
        }
    }
}

fn init_file(dir: &Path, filter: EnvFilter) -> Result<WorkerGuard> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create log dir {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()
        .context("install file logger")?;
    Ok(guard)
}

fn build_filter(level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(level.trim()).with_context(|| format!("Invalid log level: {level}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_level_parses() {
        assert!(EnvFilter::try_new("debug").is_ok());
        assert!(EnvFilter::try_new("folio_core=trace,info").is_ok());
    }

    #[test]
    fn test_invalid_level_is_reported() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let err = build_filter("folio=notalevel").unwrap_err();
        assert!(err.to_string().starts_with("Invalid log level"));
    }
}
