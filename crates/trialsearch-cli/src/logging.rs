//! Diagnostic logging setup.
//!
//! Filter comes from `TRIALSEARCH_LOG` (EnvFilter syntax), defaulting to
//! `info`. Interactive mode must not write to the screen the TUI owns, so
//! it logs through a non-blocking daily file appender under the app home;
//! one-shot mode logs to stderr.

use std::fs;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use trialsearch_core::config::paths;

pub enum Sink {
    Stderr,
    File,
}

/// Initializes the global subscriber. The returned guard (file sink only)
/// must be kept alive for the process lifetime to flush buffered lines.
pub fn init(sink: Sink) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_env("TRIALSEARCH_LOG")
        .unwrap_or_else(|_| EnvFilter::new("info"));

    match sink {
        Sink::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
        Sink::File => {
            let dir = paths::log_dir();
            fs::create_dir_all(&dir)
                .with_context(|| format!("create log directory: {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, "trialsearch.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Ok(Some(guard))
        }
    }
}
