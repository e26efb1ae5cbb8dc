//! Command-line surface of the launcher.
pub mod args;

pub use args::{parse_flag, LaunchArgs, LaunchRequest};
