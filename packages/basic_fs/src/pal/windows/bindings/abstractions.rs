use std::fmt::Debug;

use windows::Win32::Foundation::HANDLE;
use windows::Win32::Storage::FileSystem::WIN32_FIND_DATAW;
use windows::core::Result;

/// Bindings for FFI calls into external libraries (either provided by operating system or not).
///
/// All PAL FFI calls must go through this trait, enabling them to be mocked.
///
/// Every `&[u16]` path or pattern is null-terminated UTF-16.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait Bindings: Debug + Send + Sync + 'static {
    fn find_first_file(&self, pattern: &[u16], find_data: &mut WIN32_FIND_DATAW)
    -> Result<HANDLE>;

    fn find_next_file(&self, handle: HANDLE, find_data: &mut WIN32_FIND_DATAW) -> Result<()>;

    fn find_close(&self, handle: HANDLE) -> Result<()>;

    // CreateDirectoryW with default security attributes.
    fn create_directory(&self, path: &[u16]) -> Result<()>;

    fn get_file_attributes(&self, path: &[u16]) -> u32;
}
