use std::ffi::CString;
use std::io;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use libc::{
    DT_DIR, DT_UNKNOWN, S_IFDIR, S_IFMT, S_IRGRP, S_IROTH, S_IRWXU, S_IXGRP, S_IXOTH, mode_t,
};

use crate::DirectoryEntry;
use crate::pal::posix::{Bindings, BindingsFacade};
use crate::pal::{PathKind, Platform};

/// Owner `rwx`, group and other `r-x`.
const DIRECTORY_MODE: mode_t = S_IRWXU | S_IRGRP | S_IXGRP | S_IROTH | S_IXOTH;

/// POSIX has no legacy path buffer to protect.
pub(crate) const DEFAULT_PATH_LEN_CEILING: Option<usize> = None;

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

    fn is_directory_without_following_links(&self, path: &Path) -> bool {
        to_c_string(path)
            .and_then(|path| self.bindings.lstat_mode(&path))
            .is_ok_and(is_directory_mode)
    }
}

impl Platform for BuildTargetPlatform {
    fn read_directory(&self, path: &Path) -> io::Result<Vec<DirectoryEntry>> {
        let c_path = to_c_string(path)?;
        let dir = self.bindings.opendir(&c_path)?;

        let _dir_guard = scopeguard::guard(dir, |dir| {
            // SAFETY: The stream was opened above and is closed nowhere else.
            unsafe { self.bindings.closedir(dir) };
        });

        let mut entries = Vec::new();

        // SAFETY: The stream stays open until the guard is dropped on return.
        while let Some(raw) = unsafe { self.bindings.readdir(dir) }? {
            let is_directory = match raw.file_type {
                DT_DIR => true,
                // Some filesystems do not report the type during enumeration.
                DT_UNKNOWN => self.is_directory_without_following_links(&path.join(&raw.name)),
                _ => false,
            };

            entries.push(DirectoryEntry::new(raw.name, is_directory));
        }

        Ok(entries)
    }

    fn create_directory(&self, path: &Path) -> io::Result<()> {
        self.bindings.mkdir(&to_c_string(path)?, DIRECTORY_MODE)
    }

    fn path_kind(&self, path: &Path) -> Option<PathKind> {
        let mode = to_c_string(path)
            .and_then(|path| self.bindings.stat_mode(&path))
            .ok()?;

        Some(if is_directory_mode(mode) {
            PathKind::Directory
        } else {
            PathKind::Other
        })
    }
}

fn to_c_string(path: &Path) -> io::Result<CString> {
    CString::new(path.as_os_str().as_bytes())
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidInput, error))
}

fn is_directory_mode(mode: mode_t) -> bool {
    (mode & S_IFMT) == S_IFDIR
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::collections::VecDeque;
    use std::ffi::{CStr, OsStr, OsString};
    use std::ptr::NonNull;

    use libc::{DIR, DT_LNK, DT_REG, EACCES, EEXIST, EIO, S_IFREG};

    use super::*;
    use crate::pal::posix::{MockBindings, RawDirectoryEntry};

    fn raw(name: &str, file_type: u8) -> RawDirectoryEntry {
        RawDirectoryEntry {
            name: OsString::from(name),
            file_type,
        }
    }

    fn dir_handle() -> NonNull<DIR> {
        NonNull::dangling()
    }

    /// Configures the mock to open a stream that yields `records`, then expects exactly one close.
    fn simulate_stream(bindings: &mut MockBindings, records: Vec<io::Result<RawDirectoryEntry>>) {
        bindings
            .expect_opendir()
            .once()
            .returning(|_| Ok(dir_handle()));

        let mut records = VecDeque::from(records);
        bindings
            .expect_readdir()
            .withf(|dir| *dir == dir_handle())
            .returning(move |_| records.pop_front().transpose());

        bindings
            .expect_closedir()
            .once()
            .withf(|dir| *dir == dir_handle())
            .return_const(());
    }

    #[test]
    fn lists_entries_classified_by_native_type() {
        let mut bindings = MockBindings::new();

        simulate_stream(
            &mut bindings,
            vec![
                Ok(raw(".", DT_DIR)),
                Ok(raw("..", DT_DIR)),
                Ok(raw("f.txt", DT_REG)),
                Ok(raw("sub", DT_DIR)),
                Ok(raw("link", DT_LNK)),
            ],
        );

        // The native type is authoritative, so nothing is stat-ed.
        bindings.expect_lstat_mode().never();
        bindings.expect_stat_mode().never();

        let platform = BuildTargetPlatform::new(BindingsFacade::from_mock(bindings));
        let entries = platform.read_directory(Path::new("/tmp/t")).unwrap();

        assert_eq!(
            entries,
            vec![
                DirectoryEntry::new(".", true),
                DirectoryEntry::new("..", true),
                DirectoryEntry::new("f.txt", false),
                DirectoryEntry::new("sub", true),
                DirectoryEntry::new("link", false),
            ]
        );
    }

    #[test]
    fn unknown_type_falls_back_to_lstat() {
        let mut bindings = MockBindings::new();

        simulate_stream(
            &mut bindings,
            vec![Ok(raw("mystery_dir", DT_UNKNOWN)), Ok(raw("mystery_file", DT_UNKNOWN))],
        );

        bindings
            .expect_lstat_mode()
            .withf(|path| path == c"/tmp/t/mystery_dir")
            .returning(|_| Ok(S_IFDIR | DIRECTORY_MODE));
        bindings
            .expect_lstat_mode()
            .withf(|path| path == c"/tmp/t/mystery_file")
            .returning(|_| Ok(S_IFREG | 0o644));

        let platform = BuildTargetPlatform::new(BindingsFacade::from_mock(bindings));
        let entries = platform.read_directory(Path::new("/tmp/t")).unwrap();

        assert_eq!(
            entries,
            vec![
                DirectoryEntry::new("mystery_dir", true),
                DirectoryEntry::new("mystery_file", false),
            ]
        );
    }

    #[test]
    fn open_failure_does_not_close() {
        let mut bindings = MockBindings::new();

        bindings
            .expect_opendir()
            .withf(|path| path == c"/missing")
            .returning(|_| Err(io::Error::from_raw_os_error(libc::ENOENT)));
        bindings.expect_readdir().never();
        bindings.expect_closedir().never();

        let platform = BuildTargetPlatform::new(BindingsFacade::from_mock(bindings));
        let error = platform.read_directory(Path::new("/missing")).unwrap_err();

        assert_eq!(error.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn enumeration_failure_discards_partial_results_and_closes() {
        let mut bindings = MockBindings::new();

        simulate_stream(
            &mut bindings,
            vec![
                Ok(raw("f.txt", DT_REG)),
                Err(io::Error::from_raw_os_error(EIO)),
            ],
        );

        let platform = BuildTargetPlatform::new(BindingsFacade::from_mock(bindings));
        let error = platform.read_directory(Path::new("/tmp/t")).unwrap_err();

        assert_eq!(error.raw_os_error(), Some(EIO));
    }

    #[test]
    fn interior_nul_is_invalid_input() {
        let mut bindings = MockBindings::new();
        bindings.expect_opendir().never();
        bindings.expect_mkdir().never();
        bindings.expect_stat_mode().never();

        let platform = BuildTargetPlatform::new(BindingsFacade::from_mock(bindings));
        let path = Path::new(OsStr::from_bytes(b"bad\0path"));

        assert_eq!(
            platform.read_directory(path).unwrap_err().kind(),
            io::ErrorKind::InvalidInput
        );
        assert_eq!(
            platform.create_directory(path).unwrap_err().kind(),
            io::ErrorKind::InvalidInput
        );
        assert_eq!(platform.path_kind(path), None);
    }

    #[test]
    fn create_uses_conservative_mode() {
        assert_eq!(u32::from(DIRECTORY_MODE), 0o755);

        let mut bindings = MockBindings::new();
        bindings
            .expect_mkdir()
            .once()
            .withf(|path, mode| path == c"/tmp/t/new" && *mode == DIRECTORY_MODE)
            .returning(|_, _| Ok(()));

        let platform = BuildTargetPlatform::new(BindingsFacade::from_mock(bindings));

        platform.create_directory(Path::new("/tmp/t/new")).unwrap();
    }

    #[test]
    fn create_passes_through_errors() {
        let mut bindings = MockBindings::new();
        bindings
            .expect_mkdir()
            .withf(|path: &CStr, _| path == c"/exists")
            .returning(|_, _| Err(io::Error::from_raw_os_error(EEXIST)));
        bindings
            .expect_mkdir()
            .withf(|path: &CStr, _| path == c"/forbidden")
            .returning(|_, _| Err(io::Error::from_raw_os_error(EACCES)));

        let platform = BuildTargetPlatform::new(BindingsFacade::from_mock(bindings));

        assert_eq!(
            platform
                .create_directory(Path::new("/exists"))
                .unwrap_err()
                .kind(),
            io::ErrorKind::AlreadyExists
        );
        assert_eq!(
            platform
                .create_directory(Path::new("/forbidden"))
                .unwrap_err()
                .kind(),
            io::ErrorKind::PermissionDenied
        );
    }

    #[test]
    fn path_kind_follows_stat() {
        let mut bindings = MockBindings::new();
        bindings
            .expect_stat_mode()
            .withf(|path| path == c"/dir")
            .returning(|_| Ok(S_IFDIR | DIRECTORY_MODE));
        bindings
            .expect_stat_mode()
            .withf(|path| path == c"/file")
            .returning(|_| Ok(S_IFREG | 0o644));
        bindings
            .expect_stat_mode()
            .withf(|path| path == c"/missing")
            .returning(|_| Err(io::Error::from_raw_os_error(libc::ENOENT)));

        let platform = BuildTargetPlatform::new(BindingsFacade::from_mock(bindings));

        assert_eq!(
            platform.path_kind(Path::new("/dir")),
            Some(PathKind::Directory)
        );
        assert_eq!(platform.path_kind(Path::new("/file")), Some(PathKind::Other));
        assert_eq!(platform.path_kind(Path::new("/missing")), None);
    }
}
