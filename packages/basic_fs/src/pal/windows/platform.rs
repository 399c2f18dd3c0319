use std::ffi::{OsStr, OsString};
use std::io;
use std::iter;
use std::os::windows::ffi::{OsStrExt, OsStringExt};
use std::path::Path;

use windows::Win32::Foundation::{ERROR_NO_MORE_FILES, WIN32_ERROR};
use windows::Win32::Storage::FileSystem::{
    FILE_ATTRIBUTE_DIRECTORY, INVALID_FILE_ATTRIBUTES, WIN32_FIND_DATAW,
};

use crate::pal::windows::{Bindings, BindingsFacade};
use crate::pal::{PathKind, Platform};
use crate::{DirectoryEntry, LEGACY_MAX_LISTING_PATH_LEN};

/// Listing has historically been limited to what fits in a `MAX_PATH` buffer
/// together with the `\*` search suffix.
pub(crate) const DEFAULT_PATH_LEN_CEILING: Option<usize> = Some(LEGACY_MAX_LISTING_PATH_LEN);

/// Singleton instance of `BuildTargetPlatform`, used by public API types
/// to hook up to the correct PAL implementation.
pub(crate) static BUILD_TARGET_PLATFORM: BuildTargetPlatform =
    BuildTargetPlatform::new(BindingsFacade::target());

#[derive(Debug)]
pub(crate) struct BuildTargetPlatform {
    bindings: BindingsFacade,
}

impl BuildTargetPlatform {
    pub(crate) const fn new(bindings: BindingsFacade) -> Self {
        Self { bindings }
    }
}

impl Platform for BuildTargetPlatform {
    fn read_directory(&self, path: &Path) -> io::Result<Vec<DirectoryEntry>> {
        let mut pattern = path.as_os_str().to_os_string();
        pattern.push("\\*");
        let pattern = to_wide(&pattern)?;

        let mut find_data = WIN32_FIND_DATAW::default();

        let handle = self
            .bindings
            .find_first_file(&pattern, &mut find_data)
            .map_err(to_io_error)?;

        let handle = scopeguard::guard(handle, |handle| {
            if let Err(error) = self.bindings.find_close(handle) {
                tracing::debug!(%error, "failed to close directory search handle");
            }
        });

        // A successful FindFirstFileW() always yields the first entry.
        let mut entries = vec![entry_from_find_data(&find_data)];

        loop {
            match self.bindings.find_next_file(*handle, &mut find_data) {
                Ok(()) => entries.push(entry_from_find_data(&find_data)),
                Err(error) if error.code() == ERROR_NO_MORE_FILES.to_hresult() => {
                    return Ok(entries);
                }
                Err(error) => return Err(to_io_error(error)),
            }
        }
    }

    fn create_directory(&self, path: &Path) -> io::Result<()> {
        self.bindings
            .create_directory(&to_wide(path.as_os_str())?)
            .map_err(to_io_error)
    }

    fn path_kind(&self, path: &Path) -> Option<PathKind> {
        let path = to_wide(path.as_os_str()).ok()?;

        let attributes = self.bindings.get_file_attributes(&path);

        if attributes == INVALID_FILE_ATTRIBUTES {
            None
        } else if is_directory_attributes(attributes) {
            Some(PathKind::Directory)
        } else {
            Some(PathKind::Other)
        }
    }
}

fn entry_from_find_data(find_data: &WIN32_FIND_DATAW) -> DirectoryEntry {
    let name: Vec<u16> = find_data
        .cFileName
        .iter()
        .copied()
        .take_while(|&unit| unit != 0)
        .collect();

    DirectoryEntry::new(
        OsString::from_wide(&name),
        is_directory_attributes(find_data.dwFileAttributes),
    )
}

fn is_directory_attributes(attributes: u32) -> bool {
    (attributes & FILE_ATTRIBUTE_DIRECTORY.0) != 0
}

/// Null-terminated UTF-16 for the W-suffixed APIs. A NUL inside the value would silently
/// truncate it, so that is rejected.
fn to_wide(value: &OsStr) -> io::Result<Vec<u16>> {
    let wide: Vec<u16> = value.encode_wide().collect();

    if wide.contains(&0) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "path contains a NUL character",
        ));
    }

    Ok(wide.into_iter().chain(iter::once(0)).collect())
}

/// Maps to the equivalent OS error so `io::ErrorKind` classification works as usual.
fn to_io_error(error: windows::core::Error) -> io::Error {
    WIN32_ERROR::from_error(&error)
        .and_then(|code| i32::try_from(code.0).ok())
        .map_or_else(|| io::Error::other(error), io::Error::from_raw_os_error)
}
