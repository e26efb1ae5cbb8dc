//! Telemetry initialization and launch log lines.

use std::{ffi::OsString, path::Path};

use anyhow::Result;
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize `tracing` and format operator logs.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Debug line emitted once the binary is resolved and argv is known.
pub fn log_resolved(binary: &Path, argv: &[String]) {
    debug!(
        target: "redpanda_launcher::launcher",
        binary = %binary.display(),
        argv = ?argv,
        "Starting '{}' with arguments '{:?}'",
        binary.display(),
        argv
    );
}

/// Info line with the full command line, emitted right before `execve`.
pub fn log_exec(binary: &Path, argv: &[String], env: &[OsString]) {
    let env_line = env
        .iter()
        .map(|entry| entry.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ");
    info!(
        target: "redpanda_launcher::launcher",
        binary = %binary.display(),
        env_entries = env.len(),
        "Running:\n{} {} {}",
        env_line,
        binary.display(),
        argv.join(" ")
    );
}
