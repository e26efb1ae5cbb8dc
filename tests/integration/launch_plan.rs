use std::fs;

use anyhow::Result;
use serde_json::Value;

use crate::common::{install_dir_with, launcher_command, run, ECHO_SCRIPT};

fn plan_from(stdout: &[u8]) -> Result<Value> {
    Ok(serde_json::from_slice(stdout)?)
}

fn strings(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[test]
fn dry_run_prints_plan_without_ld_library_path() -> Result<()> {
    let install = install_dir_with(ECHO_SCRIPT, 0o755)?;
    let output = run(launcher_command(install.path())
        .args(["--redpanda-cfg", "/etc/rp/redpanda.yaml"])
        .args(["--flag", "smp=4", "--flag", "overprovisioned=true", "--dry-run"])
        .args(["--", "--check=false"])
        .env("LD_LIBRARY_PATH", "/nonexistent/lib")
        .env("KEEP_ME", "yes"))?;

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let plan = plan_from(&output.stdout)?;
    assert_eq!(
        plan["binary"].as_str(),
        Some(install.path().join("bin/redpanda").to_string_lossy().as_ref())
    );
    assert_eq!(
        strings(&plan["argv"]),
        vec![
            "redpanda",
            "--redpanda-cfg",
            "/etc/rp/redpanda.yaml",
            "--overprovisioned",
            "--smp=4",
            "--check=false",
        ]
    );
    let env = strings(&plan["env"]);
    assert!(env.iter().all(|entry| !entry.starts_with("LD_LIBRARY_PATH=")));

    let stderr = String::from_utf8_lossy(&output.stderr);
    let resolved_line = stderr
        .lines()
        .find(|line| line.contains("Starting '"))
        .unwrap_or_else(|| panic!("debug line with binary and argv expected: {stderr}"));
    assert!(
        resolved_line.contains(install.path().join("bin/redpanda").to_string_lossy().as_ref()),
        "line: {resolved_line}"
    );
    assert!(resolved_line.contains("--smp=4"), "line: {resolved_line}");
    assert_eq!(env.iter().filter(|entry| *entry == "KEEP_ME=yes").count(), 1);
    Ok(())
}

#[test]
fn dry_run_reads_launcher_settings_from_env() -> Result<()> {
    let install = install_dir_with(ECHO_SCRIPT, 0o755)?;
    let settings_dir = tempfile::tempdir()?;
    let settings = settings_dir.path().join("launcher.toml");
    fs::write(
        &settings,
        format!(
            "[launch]\ninstall_dir = \"{}\"\nconfig_file = \"/etc/rp/redpanda.yaml\"\n\n[launch.flags]\noverprovisioned = \"false\"\nsmp = \"2\"\n",
            install.path().display()
        ),
    )?;

    let mut command = launcher_command(install.path());
    let output = run(command
        .env("REDPANDA_LAUNCHER_CONFIG", &settings)
        .arg("--dry-run"))?;

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let plan = plan_from(&output.stdout)?;
    assert_eq!(
        strings(&plan["argv"]),
        vec!["redpanda", "--redpanda-cfg", "/etc/rp/redpanda.yaml", "--smp=2"]
    );
    Ok(())
}

#[test]
fn empty_config_path_exits_with_missing_config() -> Result<()> {
    let install = install_dir_with(ECHO_SCRIPT, 0o755)?;
    let output = run(launcher_command(install.path()).args(["--redpanda-cfg", ""]))?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Redpanda config file is required"), "stderr: {stderr}");
    assert!(!stderr.contains("Starting '"), "argv must not be logged: {stderr}");
    Ok(())
}

#[test]
fn blank_config_file_in_settings_exits_with_missing_config() -> Result<()> {
    let install = install_dir_with(ECHO_SCRIPT, 0o755)?;
    let settings_dir = tempfile::tempdir()?;
    let settings = settings_dir.path().join("launcher.toml");
    fs::write(&settings, "[launch]\nconfig_file = \"  \"\n")?;

    let output = run(launcher_command(install.path())
        .arg("--launcher-config")
        .arg(&settings))?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Redpanda config file is required"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn missing_binary_exits_with_binary_not_found() -> Result<()> {
    let empty = tempfile::tempdir()?;
    let output = run(launcher_command(empty.path()).args(["--redpanda-cfg", "/etc/rp/redpanda.yaml"]))?;

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bin/redpanda"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn missing_launcher_settings_file_fails() -> Result<()> {
    let install = install_dir_with(ECHO_SCRIPT, 0o755)?;
    let output = run(launcher_command(install.path())
        .arg("--launcher-config")
        .arg(install.path().join("absent.toml"))
        .arg("--dry-run"))?;

    assert_eq!(output.status.code(), Some(1));
    Ok(())
}
