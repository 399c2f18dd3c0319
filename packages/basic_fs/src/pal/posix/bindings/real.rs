use std::ffi::{CStr, OsStr};
use std::fmt::Debug;
use std::os::unix::ffi::OsStrExt;
use std::ptr::NonNull;
use std::{io, mem};

#[cfg(target_os = "macos")]
use libc::__error as errno_location;
#[cfg(target_os = "linux")]
use libc::__errno_location as errno_location;
use libc::{DIR, mode_t};

use crate::pal::posix::{Bindings, RawDirectoryEntry};

/// FFI bindings that target the real operating system that the build is targeting.
///
/// You would only use different bindings in PAL unit tests that need to use mock bindings.
/// Even then, whenever possible, unit tests should use real bindings for maximum realism.
#[derive(Debug, Default)]
pub(crate) struct BuildTargetBindings;

// Real OS bindings are excluded from coverage measurement because:
// 1. They are tested via integration tests running on the actual operating system.
// 2. Error paths require OS-level failures that are impractical to trigger in tests.
#[cfg_attr(coverage_nightly, coverage(off))]
impl Bindings for BuildTargetBindings {
    fn opendir(&self, path: &CStr) -> io::Result<NonNull<DIR>> {
        // SAFETY: `path` is a valid null-terminated string, no other safety requirements.
        let dir = unsafe { libc::opendir(path.as_ptr()) };

        NonNull::new(dir).ok_or_else(io::Error::last_os_error)
    }

    unsafe fn readdir(&self, dir: NonNull<DIR>) -> io::Result<Option<RawDirectoryEntry>> {
        // readdir() signals both "end of stream" and "error" with a null pointer, telling them
        // apart only by whether errno changed.
        clear_errno();

        // SAFETY: Forwarding safety requirements to caller.
        let entry = unsafe { libc::readdir(dir.as_ptr()) };

        let Some(entry) = NonNull::new(entry) else {
            let error = io::Error::last_os_error();

            return match error.raw_os_error() {
                Some(0) | None => Ok(None),
                Some(_) => Err(error),
            };
        };

        // SAFETY: readdir() returned a valid entry that stays valid until the next call on the
        // same stream. We copy everything we need out of it before returning.
        let entry = unsafe { entry.as_ref() };

        // SAFETY: The platform guarantees d_name is null-terminated within its buffer.
        let name = unsafe { CStr::from_ptr(entry.d_name.as_ptr()) };

        Ok(Some(RawDirectoryEntry {
            name: OsStr::from_bytes(name.to_bytes()).to_os_string(),
            file_type: entry.d_type,
        }))
    }

    unsafe fn closedir(&self, dir: NonNull<DIR>) {
        // The only documented failure is an invalid stream, which the caller promises us is
        // not the case, so the result carries no information.
        // SAFETY: Forwarding safety requirements to caller.
        unsafe { libc::closedir(dir.as_ptr()) };
    }

    fn mkdir(&self, path: &CStr, mode: mode_t) -> io::Result<()> {
        // SAFETY: `path` is a valid null-terminated string, no other safety requirements.
        let result = unsafe { libc::mkdir(path.as_ptr(), mode) };

        if result == 0 {
            Ok(())
        } else {
            Err(io::Error::last_os_error())
        }
    }

    fn stat_mode(&self, path: &CStr) -> io::Result<mode_t> {
        // SAFETY: All-zero is a valid initial value for this type.
        let mut stat: libc::stat = unsafe { mem::zeroed() };

        // SAFETY: We are passing valid arguments, no other safety requirements.
        let result = unsafe { libc::stat(path.as_ptr(), &raw mut stat) };

        if result == 0 {
            Ok(stat.st_mode)
        } else {
            Err(io::Error::last_os_error())
        }
    }

    fn lstat_mode(&self, path: &CStr) -> io::Result<mode_t> {
        // SAFETY: All-zero is a valid initial value for this type.
        let mut stat: libc::stat = unsafe { mem::zeroed() };

        // SAFETY: We are passing valid arguments, no other safety requirements.
        let result = unsafe { libc::lstat(path.as_ptr(), &raw mut stat) };

        if result == 0 {
            Ok(stat.st_mode)
        } else {
            Err(io::Error::last_os_error())
        }
    }
}

fn clear_errno() {
    // SAFETY: No safety requirements.
    let errno = unsafe { errno_location() };

    // SAFETY: errno is thread-local storage that is always valid for writes.
    unsafe { errno.write(0) };
}
