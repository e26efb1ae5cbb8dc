//! CLI argument definitions and `LaunchRequest` construction.
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use crate::{
    config::{launch::check_flag_name, LauncherConfig},
    launcher::{FlagRules, LaunchConfig},
    lib::paths,
};

/// Everything needed for one launch, after merging CLI and file settings.
#[derive(Debug, Clone)]
pub struct LaunchRequest {
    pub install_dir: PathBuf,
    pub config: LaunchConfig,
    pub rules: FlagRules,
    pub dry_run: bool,
}

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Start Redpanda in place of this process",
    long_about = "Start Redpanda in place of this process.\n\nThe command line handed to Redpanda is `redpanda --redpanda-cfg <PATH> [--flag | --flag=value ...] [extra args...]`. LD_LIBRARY_PATH is removed from the inherited environment.",
    after_help = "Hint: use `--dry-run` to print the resolved binary, argv, and environment as JSON without starting Redpanda."
)]
pub struct LaunchArgs {
    /// Path to launcher settings (overrides REDPANDA_LAUNCHER_CONFIG).
    #[arg(long = "launcher-config")]
    pub launcher_config: Option<PathBuf>,
    /// Redpanda installation directory containing `bin/redpanda`.
    #[arg(long = "install-dir")]
    pub install_dir: Option<PathBuf>,
    /// Path to redpanda.yaml, passed through as `--redpanda-cfg`.
    #[arg(long = "redpanda-cfg")]
    pub config_file: Option<String>,
    /// Flag for Redpanda as NAME=VALUE, or a bare NAME for a value-less flag.
    #[arg(long = "flag", value_name = "NAME[=VALUE]", value_parser = parse_flag)]
    pub flags: Vec<(String, String)>,
    /// Treat NAME as boolean-only: emitted bare when `true`, omitted otherwise.
    #[arg(long = "boolean-flag", value_name = "NAME")]
    pub boolean_flags: Vec<String>,
    /// Print the launch plan instead of executing Redpanda.
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
    /// Arguments appended verbatim after all flags.
    #[arg(last = true, value_name = "EXTRA")]
    pub extra_args: Vec<String>,
}

impl LaunchArgs {
    /// Load launcher settings and merge CLI overrides on top of them.
    pub fn into_request(self) -> Result<LaunchRequest> {
        let settings = LauncherConfig::load(self.launcher_config.clone())?;
        self.merge(settings)
    }

    /// Merge CLI values over already loaded settings.
    pub fn merge(self, settings: LauncherConfig) -> Result<LaunchRequest> {
        let section = settings.launch;

        for name in &self.boolean_flags {
            check_flag_name(name).map_err(|message| anyhow!("invalid --boolean-flag: {message}"))?;
        }
        let rules = section
            .flag_rules()
            .with_boolean_flags(self.boolean_flags.iter().cloned());

        let mut config = section.to_launch_config();
        if let Some(config_file) = self.config_file {
            config.config_file_path = config_file;
        }
        config.flags.extend(self.flags);
        config.extra_args.extend(self.extra_args);

        let install_dir = self.install_dir.unwrap_or(section.install_dir);
        let install_dir = paths::absolutize(&install_dir)
            .context("failed to obtain current directory")?;

        Ok(LaunchRequest {
            install_dir,
            config,
            rules,
            dry_run: self.dry_run,
        })
    }
}

/// Parse `NAME=VALUE` or `NAME` (empty value) from `--flag`.
pub fn parse_flag(raw: &str) -> Result<(String, String), String> {
    let (name, value) = match raw.split_once('=') {
        Some((name, value)) => (name, value),
        None => (raw, ""),
    };
    check_flag_name(name)?;
    Ok((name.to_string(), value.to_string()))
}
