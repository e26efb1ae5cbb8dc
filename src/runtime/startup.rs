use std::process::ExitCode;

use anyhow::Error;

use crate::{
    cli::LaunchRequest,
    launcher::Launcher,
    lib::errors::LaunchError,
};

/// Bundles a runtime error message with an exit status.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    status: u8,
}

impl RuntimeExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:?}"),
            status: 1,
        }
    }

    pub fn from_launch_error(err: LaunchError) -> Self {
        Self {
            status: err.exit_status(),
            message: err.to_string(),
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        ExitCode::from(self.status)
    }

    pub fn status(&self) -> u8 {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Execute a launch request. Returns only for `--dry-run` or on failure.
pub fn run_launch(request: LaunchRequest) -> Result<(), RuntimeExit> {
    let launcher = Launcher::new(request.install_dir, request.config).with_flag_rules(request.rules);

    if request.dry_run {
        let plan = launcher.prepare().map_err(RuntimeExit::from_launch_error)?;
        let rendered =
            serde_json::to_string_pretty(&plan.to_json()).map_err(RuntimeExit::from_error)?;
        println!("{rendered}");
        return Ok(());
    }

    match launcher.start() {
        Ok(never) => match never {},
        Err(err) => Err(RuntimeExit::from_launch_error(err)),
    }
}
