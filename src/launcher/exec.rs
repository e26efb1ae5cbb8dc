//! Process image replacement.
use std::{
    ffi::{CString, OsStr},
    io,
    os::unix::ffi::OsStrExt,
    ptr,
};

use super::LaunchPlan;

/// Replace the current process with the program described by a plan.
pub trait ProcessImage {
    /// On success this never returns; the returned error describes why it could not happen.
    fn replace(&self, plan: &LaunchPlan) -> io::Error;
}

/// `execve(2)` against the running process.
pub struct SystemProcessImage;

impl ProcessImage for SystemProcessImage {
    fn replace(&self, plan: &LaunchPlan) -> io::Error {
        let path = match to_cstring(plan.binary.as_os_str()) {
            Ok(path) => path,
            Err(err) => return err,
        };
        let argv = match plan
            .argv
            .iter()
            .map(|arg| to_cstring(OsStr::new(arg)))
            .collect::<io::Result<Vec<_>>>()
        {
            Ok(argv) => argv,
            Err(err) => return err,
        };
        let envp = match plan
            .env
            .iter()
            .map(|entry| to_cstring(entry))
            .collect::<io::Result<Vec<_>>>()
        {
            Ok(envp) => envp,
            Err(err) => return err,
        };

        let argv_ptrs = null_terminated(&argv);
        let envp_ptrs = null_terminated(&envp);
        // SAFETY: every pointer refers to a CString kept alive above and both arrays end in NULL.
        unsafe { libc::execve(path.as_ptr(), argv_ptrs.as_ptr(), envp_ptrs.as_ptr()) };
        io::Error::last_os_error()
    }
}

fn to_cstring(value: &OsStr) -> io::Result<CString> {
    CString::new(value.as_bytes()).map_err(|err| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("argument contains an interior NUL byte: {err}"),
        )
    })
}

fn null_terminated(values: &[CString]) -> Vec<*const libc::c_char> {
    values
        .iter()
        .map(|value| value.as_ptr())
        .chain(std::iter::once(ptr::null()))
        .collect()
}
