//! Environment handed to the launched binary.
use std::{
    env,
    ffi::{OsStr, OsString},
    os::unix::ffi::OsStrExt,
};

/// Variable stripped from the inherited environment.
pub const LD_LIBRARY_PATH: &str = "LD_LIBRARY_PATH";

/// Snapshot the live process environment as raw `NAME=VALUE` entries.
///
/// Built on `std::env::vars_os`, so raw `environ` entries without any `=` are
/// not included and never reach the launched binary.
pub fn current_environment() -> Vec<OsString> {
    env::vars_os()
        .map(|(name, value)| {
            let mut entry = name;
            entry.push("=");
            entry.push(value);
            entry
        })
        .collect()
}

/// Drop every `LD_LIBRARY_PATH` entry, keeping all others in order.
pub fn filter_environment<I>(entries: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    entries
        .into_iter()
        .filter(|entry| entry_name(entry) != LD_LIBRARY_PATH.as_bytes())
        .collect()
}

fn entry_name(entry: &OsStr) -> &[u8] {
    let bytes = entry.as_bytes();
    match bytes.iter().position(|b| *b == b'=') {
        Some(idx) => &bytes[..idx],
        None => bytes,
    }
}
