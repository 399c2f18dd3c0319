use std::ffi::{CStr, OsString};
use std::fmt::Debug;
use std::io;
use std::ptr::NonNull;

use libc::{DIR, mode_t};

/// One record read from a directory stream, copied out of the `dirent` buffer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct RawDirectoryEntry {
    pub(crate) name: OsString,

    /// The `d_type` field, one of the `DT_*` constants.
    pub(crate) file_type: u8,
}

/// Bindings for FFI calls into external libraries (either provided by operating system or not).
///
/// All PAL FFI calls must go through this trait, enabling them to be mocked.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait Bindings: Debug + Send + Sync + 'static {
    fn opendir(&self, path: &CStr) -> io::Result<NonNull<DIR>>;

    /// `readdir()`, returning `Ok(None)` once the stream is exhausted.
    ///
    /// # Safety
    ///
    /// `dir` must be a stream returned by `opendir()` that has not been closed yet.
    unsafe fn readdir(&self, dir: NonNull<DIR>) -> io::Result<Option<RawDirectoryEntry>>;

    /// # Safety
    ///
    /// `dir` must be a stream returned by `opendir()` that has not been closed yet. The stream
    /// must not be used after this call.
    unsafe fn closedir(&self, dir: NonNull<DIR>);

    fn mkdir(&self, path: &CStr, mode: mode_t) -> io::Result<()>;

    // st_mode from stat(), following symbolic links.
    fn stat_mode(&self, path: &CStr) -> io::Result<mode_t>;

    // st_mode from lstat(), not following symbolic links.
    fn lstat_mode(&self, path: &CStr) -> io::Result<mode_t>;
}
