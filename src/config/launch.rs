use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{
    launcher::{FlagRules, LaunchConfig},
    lib::{errors::ConfigError, paths},
};

pub const DEFAULT_INSTALL_DIR: &str = "/opt/redpanda";
pub const DEFAULT_CONFIG_FILE: &str = "/etc/redpanda/redpanda.yaml";

/// `[launch]` settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSection {
    pub install_dir: PathBuf,
    pub config_file: String,
    pub flags: BTreeMap<String, String>,
    pub extra_args: Vec<String>,
    pub boolean_flags: Vec<String>,
}

impl Default for LaunchSection {
    fn default() -> Self {
        Self {
            install_dir: PathBuf::from(DEFAULT_INSTALL_DIR),
            config_file: DEFAULT_CONFIG_FILE.to_string(),
            flags: BTreeMap::new(),
            extra_args: Vec::new(),
            boolean_flags: Vec::new(),
        }
    }
}

impl LaunchSection {
    /// Built-in boolean flags plus the ones listed in `boolean_flags`.
    pub fn flag_rules(&self) -> FlagRules {
        FlagRules::default().with_boolean_flags(self.boolean_flags.iter().cloned())
    }

    pub fn to_launch_config(&self) -> LaunchConfig {
        LaunchConfig {
            config_file_path: self.config_file.clone(),
            flags: self.flags.clone(),
            extra_args: self.extra_args.clone(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawLaunchSection {
    pub install_dir: Option<PathBuf>,
    pub config_file: Option<String>,
    pub flags: Option<BTreeMap<String, String>>,
    pub extra_args: Option<Vec<String>>,
    pub boolean_flags: Option<Vec<String>>,
}

pub fn parse_launch_section(
    raw: Option<RawLaunchSection>,
    path: &Path,
) -> Result<LaunchSection, ConfigError> {
    let raw = raw.unwrap_or_default();

    let install_dir = raw
        .install_dir
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INSTALL_DIR));
    validate_install_dir(path, &install_dir)?;

    // A blank value is reported at launch time as a missing Redpanda config.
    let config_file = raw
        .config_file
        .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());

    let flags = raw.flags.unwrap_or_default();
    for name in flags.keys() {
        validate_flag_name(path, "launch.flags", name)?;
    }

    let boolean_flags = raw.boolean_flags.unwrap_or_default();
    for name in &boolean_flags {
        validate_flag_name(path, "launch.boolean_flags", name)?;
    }

    Ok(LaunchSection {
        install_dir,
        config_file,
        flags,
        extra_args: raw.extra_args.unwrap_or_default(),
        boolean_flags,
    })
}

fn validate_install_dir(path: &Path, install_dir: &Path) -> Result<(), ConfigError> {
    if !paths::is_nonempty_absolute(install_dir) {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "launch.install_dir",
            message: format!(
                "Provide an absolute installation directory: {}",
                install_dir.display()
            ),
        });
    }
    Ok(())
}

/// Also used by the CLI for `--flag` and `--boolean-flag`.
pub(crate) fn check_flag_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Flag names cannot be empty".into());
    }
    if name.starts_with('-') {
        return Err(format!("Give flag names without leading dashes: {name}"));
    }
    if name.contains('=') || name.chars().any(char::is_whitespace) {
        return Err(format!("Flag names cannot contain `=` or whitespace: {name}"));
    }
    Ok(())
}

fn validate_flag_name(path: &Path, field: &'static str, name: &str) -> Result<(), ConfigError> {
    check_flag_name(name).map_err(|message| ConfigError::InvalidField {
        path: path.to_path_buf(),
        field,
        message,
    })
}
