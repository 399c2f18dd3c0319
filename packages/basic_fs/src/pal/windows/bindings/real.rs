use windows::Win32::Foundation::HANDLE;
use windows::Win32::Storage::FileSystem::{
    CreateDirectoryW, FindClose, FindFirstFileW, FindNextFileW, GetFileAttributesW,
    WIN32_FIND_DATAW,
};
use windows::core::{PCWSTR, Result};

use crate::pal::windows::Bindings;

/// FFI bindings that target the real operating system that the build is targeting.
///
/// You would only use different bindings in PAL unit tests that need to use mock bindings.
/// Even then, whenever possible, unit tests should use real bindings for maximum realism.
#[derive(Debug, Default)]
pub(crate) struct BuildTargetBindings;

#[cfg_attr(coverage_nightly, coverage(off))]
impl Bindings for BuildTargetBindings {
    fn find_first_file(
        &self,
        pattern: &[u16],
        find_data: &mut WIN32_FIND_DATAW,
    ) -> Result<HANDLE> {
        debug_assert_eq!(pattern.last(), Some(&0));

        // SAFETY: The pattern is null-terminated and outlives the call, the output is
        // a valid exclusive reference.
        unsafe { FindFirstFileW(PCWSTR::from_raw(pattern.as_ptr()), find_data) }
    }

    fn find_next_file(&self, handle: HANDLE, find_data: &mut WIN32_FIND_DATAW) -> Result<()> {
        // SAFETY: The output is a valid exclusive reference. An invalid handle is reported
        // as an error, not undefined behavior.
        unsafe { FindNextFileW(handle, find_data) }
    }

    fn find_close(&self, handle: HANDLE) -> Result<()> {
        // SAFETY: An invalid handle is reported as an error, not undefined behavior.
        unsafe { FindClose(handle) }
    }

    fn create_directory(&self, path: &[u16]) -> Result<()> {
        debug_assert_eq!(path.last(), Some(&0));

        // SAFETY: The path is null-terminated and outlives the call.
        unsafe { CreateDirectoryW(PCWSTR::from_raw(path.as_ptr()), None) }
    }

    fn get_file_attributes(&self, path: &[u16]) -> u32 {
        debug_assert_eq!(path.last(), Some(&0));

        // SAFETY: The path is null-terminated and outlives the call.
        unsafe { GetFileAttributesW(PCWSTR::from_raw(path.as_ptr())) }
    }
}
