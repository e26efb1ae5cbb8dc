use tracing::{debug, info};

use super::{LauncherConfig, CONFIG_ENV_KEY};

pub fn log_env_source(path: &std::path::Path) {
    info!(
        target: "redpanda_launcher::config",
        path = %path.display(),
        "Loading launcher configuration using REDPANDA_LAUNCHER_CONFIG environment variable"
    );
}

pub fn log_defaults() {
    debug!(
        target: "redpanda_launcher::config",
        env = CONFIG_ENV_KEY,
        "No launcher configuration given; using built-in defaults"
    );
}

pub fn log_loaded(config: &LauncherConfig) {
    info!(
        target: "redpanda_launcher::config",
        path = %config
            .source_path
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_default(),
        install_dir = %config.launch.install_dir.display(),
        config_file = %config.launch.config_file,
        flags = config.launch.flags.len(),
        extra_args = config.launch.extra_args.len(),
        "Launcher configuration loaded successfully"
    );
}
