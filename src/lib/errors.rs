use std::{io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

/// Errors that can occur while loading or validating the launcher settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the configuration file.
    #[error("Failed to read launcher configuration {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse launcher configuration {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Field failed validation.
    #[error("Launcher configuration {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// Failures of a single launch attempt. None of them is retried.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The path to the Redpanda configuration file was empty.
    #[error("Redpanda config file is required")]
    MissingConfig,
    /// No executable was found at `<install_dir>/bin/redpanda`.
    #[error("{path}: {source}")]
    BinaryNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// `execve` itself failed; the calling process is still running.
    #[error("failed to execute {path}: {source}")]
    ExecFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    /// Process exit status reported when this error ends the launcher.
    pub fn exit_status(&self) -> u8 {
        match self {
            LaunchError::MissingConfig => 2,
            LaunchError::BinaryNotFound { .. } => 3,
            LaunchError::ExecFailed { .. } => 4,
        }
    }
}
