//! Launch orchestration and exit reporting.
mod startup;

pub use startup::{run_launch, RuntimeExit};
