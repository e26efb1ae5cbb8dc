//! Hand the current process over to the Redpanda binary.
//!
//! [`Launcher::start`] validates the request, resolves `<install_dir>/bin/redpanda`,
//! synthesizes argv from a [`LaunchConfig`], strips `LD_LIBRARY_PATH` from the
//! inherited environment and finally replaces the process image. It only
//! returns when something went wrong.
use std::{
    convert::Infallible,
    ffi::OsString,
    path::{Path, PathBuf},
};

use serde_json::{json, Value};

use crate::lib::{errors::LaunchError, paths, telemetry};

pub mod args;
pub mod env;
pub mod exec;

pub use args::{collect_args, FlagRules, LaunchConfig, DEFAULT_BOOLEAN_FLAGS, PROGRAM_NAME};
pub use env::{current_environment, filter_environment, LD_LIBRARY_PATH};
pub use exec::{ProcessImage, SystemProcessImage};

/// Executable name looked up under `<install_dir>/bin`.
pub const BINARY_NAME: &str = "redpanda";

/// Computed argv and environment, ready for process replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    pub binary: PathBuf,
    pub argv: Vec<String>,
    pub env: Vec<OsString>,
}

impl LaunchPlan {
    /// JSON rendering used by `--dry-run`.
    pub fn to_json(&self) -> Value {
        json!({
            "binary": self.binary.to_string_lossy(),
            "argv": self.argv,
            "env": self
                .env
                .iter()
                .map(|entry| entry.to_string_lossy().into_owned())
                .collect::<Vec<_>>(),
        })
    }
}

/// Locate the Redpanda executable inside an installation directory.
pub fn resolve_binary(install_dir: &Path) -> Result<PathBuf, LaunchError> {
    let candidate = install_dir.join("bin").join(BINARY_NAME);
    let path = paths::absolutize(&candidate).map_err(|source| LaunchError::BinaryNotFound {
        path: candidate.clone(),
        source,
    })?;
    paths::ensure_executable(&path)
        .map_err(|source| LaunchError::BinaryNotFound { path: path.clone(), source })?;
    Ok(path)
}

/// Single-shot launcher for one [`LaunchConfig`].
pub struct Launcher<P: ProcessImage = SystemProcessImage> {
    install_dir: PathBuf,
    config: LaunchConfig,
    rules: FlagRules,
    environment: Option<Vec<OsString>>,
    image: P,
}

impl Launcher<SystemProcessImage> {
    pub fn new(install_dir: impl Into<PathBuf>, config: LaunchConfig) -> Self {
        Self::with_process_image(install_dir, config, SystemProcessImage)
    }
}

impl<P: ProcessImage> Launcher<P> {
    pub fn with_process_image(
        install_dir: impl Into<PathBuf>,
        config: LaunchConfig,
        image: P,
    ) -> Self {
        Self {
            install_dir: install_dir.into(),
            config,
            rules: FlagRules::default(),
            environment: None,
            image,
        }
    }

    /// Replace the boolean-only flag table.
    pub fn with_flag_rules(mut self, rules: FlagRules) -> Self {
        self.rules = rules;
        self
    }

    /// Use `entries` instead of the live process environment.
    pub fn with_environment<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        self.environment = Some(entries.into_iter().collect());
        self
    }

    /// Validate the request and compute argv and environment without executing anything.
    pub fn prepare(&self) -> Result<LaunchPlan, LaunchError> {
        // Checked before touching the filesystem. Whitespace-only counts as empty.
        if self.config.config_file_path.trim().is_empty() {
            return Err(LaunchError::MissingConfig);
        }
        let binary = resolve_binary(&self.install_dir)?;
        let argv = collect_args(&self.config, &self.rules);
        telemetry::log_resolved(&binary, &argv);

        let inherited = match &self.environment {
            Some(entries) => entries.clone(),
            None => current_environment(),
        };
        let env = filter_environment(inherited);

        Ok(LaunchPlan { binary, argv, env })
    }

    /// Replace the current process with Redpanda. Returns only on failure.
    pub fn start(&self) -> Result<Infallible, LaunchError> {
        let plan = self.prepare()?;
        telemetry::log_exec(&plan.binary, &plan.argv, &plan.env);
        let source = self.image.replace(&plan);
        Err(LaunchError::ExecFailed {
            path: plan.binary,
            source,
        })
    }
}
