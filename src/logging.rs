//! Tracing subscriber setup for the binary

use anyhow::{Context, Result, anyhow};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where log records go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Plain stderr output, for runs without a TUI
    Stderr,
    /// Append to a file; the TUI owns stderr
    File(PathBuf),
    /// No subscriber at all
    Off,
}

/// `RUST_LOG` wins over the default level
fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

pub fn init(target: LogTarget, default_level: &str) -> Result<()> {
    match target {
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(env_filter(default_level))
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow!("Failed to install tracing subscriber: {e}")),
        LogTarget::File(path) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {:?}", path))?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(default_level))
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| anyhow!("Failed to install tracing subscriber: {e}"))
        }
        LogTarget::Off => Ok(()),
    }
}
