//! Backend for targets without a native implementation, built on `std::fs`. Also used under Miri.

#![cfg_attr(
    not(any(miri, not(any(target_os = "linux", target_os = "macos", windows)))),
    allow(dead_code, reason = "only exercised by unit tests on platforms with a native backend")
)]

use std::fs::{self, DirBuilder};
use std::io;
#[cfg(unix)]
use std::os::unix::fs::DirBuilderExt;
use std::path::Path;

use crate::DirectoryEntry;
use crate::pal::{PathKind, Platform};

/// Owner `rwx`, group and other `r-x`.
#[cfg(unix)]
const DIRECTORY_MODE: u32 = 0o755;

/// The portable backends have no legacy path buffer to protect.
pub(crate) const DEFAULT_PATH_LEN_CEILING: Option<usize> = None;

/// Singleton instance of `BuildTargetPlatform`, used by public API types
/// to hook up to the correct PAL implementation.
pub(crate) static BUILD_TARGET_PLATFORM: BuildTargetPlatform = BuildTargetPlatform;

/// Fallback platform implementation for operating systems without native support.
///
/// `std::fs::read_dir()` never yields `.` or `..`, and `DirEntry::file_type()` is answered from
/// the enumeration record itself wherever the platform provides one.
#[derive(Debug)]
pub(crate) struct BuildTargetPlatform;

impl Platform for BuildTargetPlatform {
    fn read_directory(&self, path: &Path) -> io::Result<Vec<DirectoryEntry>> {
        fs::read_dir(path)?
            .map(|entry| {
                let entry = entry?;
                let file_type = entry.file_type()?;

                Ok(DirectoryEntry::new(entry.file_name(), file_type.is_dir()))
            })
            .collect()
    }

    fn create_directory(&self, path: &Path) -> io::Result<()> {
        let mut builder = DirBuilder::new();

        #[cfg(unix)]
        builder.mode(DIRECTORY_MODE);

        builder.create(path)
    }

    fn path_kind(&self, path: &Path) -> Option<PathKind> {
        let metadata = fs::metadata(path).ok()?;

        Some(if metadata.is_dir() {
            PathKind::Directory
        } else {
            PathKind::Other
        })
    }
}
