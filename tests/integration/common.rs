use std::{
    fs,
    os::unix::fs::PermissionsExt,
    path::Path,
    process::{Command, Output, Stdio},
};

use anyhow::{Context, Result};
use tempfile::TempDir;

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_redpanda-launcher");

/// Script installed as `bin/redpanda`: echoes its arguments, pid and two env probes.
pub const ECHO_SCRIPT: &str = r#"#!/bin/sh
printf 'PID=%s\n' "$$"
for arg in "$@"; do
  printf 'ARG=%s\n' "$arg"
done
printf 'LD_LIBRARY_PATH=%s\n' "${LD_LIBRARY_PATH-unset}"
printf 'KEEP_ME=%s\n' "${KEEP_ME-unset}"
"#;

/// Create `<tmp>/bin/redpanda` with the given contents and mode.
pub fn install_dir_with(contents: &str, mode: u32) -> Result<TempDir> {
    let temp = tempfile::tempdir().context("failed to create install dir")?;
    let bin = temp.path().join("bin");
    fs::create_dir_all(&bin).with_context(|| format!("failed to create {}", bin.display()))?;
    let binary = bin.join("redpanda");
    fs::write(&binary, contents)
        .with_context(|| format!("failed to write {}", binary.display()))?;
    let mut permissions = fs::metadata(&binary)?.permissions();
    permissions.set_mode(mode);
    fs::set_permissions(&binary, permissions)?;
    Ok(temp)
}

pub fn launcher_command(install_dir: &Path) -> Command {
    let mut command = Command::new(BINARY_PATH);
    command
        .arg("--install-dir")
        .arg(install_dir)
        .env_remove("REDPANDA_LAUNCHER_CONFIG")
        .env("RUST_LOG", "debug")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    command
}

pub fn run(command: &mut Command) -> Result<Output> {
    command.output().context("failed to run launcher")
}

pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}
