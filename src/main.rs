//! Entry point for the Redpanda launcher.
use std::process::ExitCode;

use clap::Parser;
use redpanda_launcher::{
    cli::LaunchArgs,
    lib::telemetry,
    runtime::{self, RuntimeExit},
};

fn main() -> ExitCode {
    match bootstrap() {
        Ok(_) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

fn bootstrap() -> Result<(), RuntimeExit> {
    telemetry::init_tracing().map_err(RuntimeExit::from_error)?;
    let args = LaunchArgs::parse();
    let request = args.into_request().map_err(RuntimeExit::from_error)?;
    runtime::run_launch(request)
}
