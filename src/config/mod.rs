//! Load and validate the launcher settings file.
use std::{env, path::PathBuf};

use serde::Deserialize;
use tracing::{error, info};

use crate::lib::errors::ConfigError;

pub mod launch;
pub mod telemetry;

pub use launch::{
    parse_launch_section, LaunchSection, RawLaunchSection, DEFAULT_CONFIG_FILE,
    DEFAULT_INSTALL_DIR,
};

pub const CONFIG_ENV_KEY: &str = "REDPANDA_LAUNCHER_CONFIG";

/// Top-level configuration container.
#[derive(Debug, Clone, Default)]
pub struct LauncherConfig {
    pub launch: LaunchSection,
    /// File the settings came from; `None` when only built-in defaults apply.
    pub source_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawLauncherConfig {
    launch: Option<RawLaunchSection>,
}

impl LauncherConfig {
    /// Load `override_path` if given, else `REDPANDA_LAUNCHER_CONFIG` if set, else defaults.
    pub fn load(override_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        if let Some(path) = override_path {
            return Self::load_from_path(path);
        }
        match env::var(CONFIG_ENV_KEY) {
            Ok(value) if !value.trim().is_empty() => {
                let path = PathBuf::from(value);
                telemetry::log_env_source(&path);
                Self::load_from_path(path)
            }
            _ => {
                telemetry::log_defaults();
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        info!(
            target: "redpanda_launcher::config",
            path = %path.display(),
            "Starting launcher configuration load"
        );

        let builder = config::Config::builder().add_source(config::File::from(path.clone()));
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "redpanda_launcher::config",
                path = %path.display(),
                reason = %error,
                "Failed to read launcher configuration"
            );
            error
        })?;

        let raw: RawLauncherConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "redpanda_launcher::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse launcher configuration"
            );
            error
        })?;

        let config = Self::from_raw(raw, path.clone()).map_err(|err| {
            error!(
                target: "redpanda_launcher::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate launcher configuration"
            );
            err
        })?;

        telemetry::log_loaded(&config);
        Ok(config)
    }

    fn from_raw(raw: RawLauncherConfig, path: PathBuf) -> Result<Self, ConfigError> {
        let launch = parse_launch_section(raw.launch, &path)?;
        Ok(Self {
            launch,
            source_path: Some(path),
        })
    }
}
