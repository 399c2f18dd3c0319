use std::io;
use std::path::Path;

use tracing::{debug, trace};

use crate::pal::{PathKind, Platform, PlatformFacade};
use crate::{DirectoryEntry, DotfilePolicy, Error, FilesystemBuilder, Result};

/// Size of the fixed path buffer the Windows listing backend historically used (`MAX_PATH`).
pub const LEGACY_MAX_PATH: usize = 260;

/// Longest path (in characters) the Windows backend accepts for listing by default.
///
/// Two characters of [`LEGACY_MAX_PATH`] are reserved for the `\*` search suffix that is
/// appended internally. Listing a longer path fails even if the directory exists.
pub const LEGACY_MAX_LISTING_PATH_LEN: usize = 258;

/// Result of a successful [`Filesystem::try_create_directory()`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum CreateOutcome {
    /// The directory did not exist and has now been created.
    Created,

    /// A directory was already present at the path. Nothing was changed.
    AlreadyExisted,
}

/// Performs filesystem operations against the backend selected for the build target.
///
/// The free functions [`list_directory()`][crate::list_directory],
/// [`create_directory()`][crate::create_directory] and [`path_exists()`][crate::path_exists]
/// use a default-configured instance. Create your own via [`builder()`][Self::builder] to change
/// the dotfile policy or the listing path length ceiling.
///
/// Every operation is a direct, blocking call into the operating system. Instances hold no
/// mutable state and can be shared freely between threads.
///
/// # Example
///
/// ```
/// use basic_fs::{DotfilePolicy, Filesystem};
///
/// let filesystem = Filesystem::builder()
///     .dotfile_policy(DotfilePolicy::ExcludeTraversal)
///     .without_path_len_ceiling()
///     .build();
///
/// let entries = filesystem.list_directory(std::env::temp_dir());
/// println!("{} entries, including hidden ones", entries.len());
/// ```
#[derive(Clone, Debug)]
pub struct Filesystem {
    platform: PlatformFacade,
    dotfile_policy: DotfilePolicy,
    path_len_ceiling: Option<usize>,
}

impl Filesystem {
    /// Creates a filesystem with the default configuration for the build target.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Starts building a filesystem with custom configuration.
    pub fn builder() -> FilesystemBuilder {
        FilesystemBuilder::new(PlatformFacade::target())
    }

    #[must_use]
    pub(crate) fn from_parts(
        platform: PlatformFacade,
        dotfile_policy: DotfilePolicy,
        path_len_ceiling: Option<usize>,
    ) -> Self {
        Self {
            platform,
            dotfile_policy,
            path_len_ceiling,
        }
    }

    /// The dotfile policy applied to listings.
    #[must_use]
    pub fn dotfile_policy(&self) -> DotfilePolicy {
        self.dotfile_policy
    }

    /// The longest path (in characters) that can be listed, if limited.
    #[must_use]
    pub fn path_len_ceiling(&self) -> Option<usize> {
        self.path_len_ceiling
    }

    /// Lists the immediate children of a directory.
    ///
    /// Returns an empty vector if the path does not exist, is not a directory, cannot be read or
    /// is longer than the path length ceiling. Use [`try_list_directory()`][Self::try_list_directory]
    /// to tell these cases apart from an empty directory.
    ///
    /// The order of entries is whatever the platform yields.
    #[must_use]
    pub fn list_directory(&self, path: impl AsRef<Path>) -> Vec<DirectoryEntry> {
        let path = path.as_ref();

        self.try_list_directory(path).unwrap_or_else(|error| {
            debug!(%error, "directory listing failed, reporting no entries");
            Vec::new()
        })
    }

    /// Lists the immediate children of a directory, reporting why if that is not possible.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathTooLong`] without touching the filesystem if the path exceeds the
    /// ceiling. Otherwise returns the classified platform error. A failure part way through
    /// enumeration is an error; partial listings are never returned.
    pub fn try_list_directory(&self, path: impl AsRef<Path>) -> Result<Vec<DirectoryEntry>> {
        let path = path.as_ref();

        self.check_path_len(path)?;

        let mut entries = self
            .platform
            .read_directory(path)
            .map_err(|source| Error::from_io(path, source))?;

        entries.retain(|entry| self.dotfile_policy.is_visible(entry.name()));

        trace!(path = %path.display(), count = entries.len(), "listed directory");

        Ok(entries)
    }

    /// Ensures a directory exists at the path, creating it if absent.
    ///
    /// Only the final path segment is created; parent directories must already exist.
    /// Returns `true` if the directory was created or already existed, `false` on any other
    /// outcome (including a file already occupying the path).
    ///
    /// On Unix the directory is created with mode `0o755`, subject to the process umask.
    #[must_use]
    pub fn create_directory(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();

        match self.try_create_directory(path) {
            Ok(_) => true,
            Err(error) => {
                debug!(%error, "directory creation failed");
                false
            }
        }
    }

    /// Ensures a directory exists at the path, reporting whether it was created or why it could
    /// not be.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyExistsNotDirectory`] if something other than a directory occupies
    /// the path, otherwise the classified platform error.
    pub fn try_create_directory(&self, path: impl AsRef<Path>) -> Result<CreateOutcome> {
        let path = path.as_ref();

        match self.platform.create_directory(path) {
            Ok(()) => {
                trace!(path = %path.display(), "created directory");
                Ok(CreateOutcome::Created)
            }
            Err(error) if error.kind() == io::ErrorKind::AlreadyExists => {
                match self.platform.path_kind(path) {
                    Some(PathKind::Directory) => Ok(CreateOutcome::AlreadyExisted),
                    Some(PathKind::Other) | None => Err(Error::AlreadyExistsNotDirectory {
                        path: path.to_path_buf(),
                    }),
                }
            }
            Err(error) => Err(Error::from_io(path, error)),
        }
    }

    /// Whether anything (file, directory or other) exists at the path.
    ///
    /// Symbolic links are followed. A path that exists but cannot be queried, for example due
    /// to missing permissions on a parent directory, is reported as not existing.
    #[must_use]
    pub fn path_exists(&self, path: impl AsRef<Path>) -> bool {
        self.platform.path_kind(path.as_ref()).is_some()
    }

    fn check_path_len(&self, path: &Path) -> Result<()> {
        let Some(limit) = self.path_len_ceiling else {
            return Ok(());
        };

        let length = path.as_os_str().to_string_lossy().chars().count();

        if length > limit {
            return Err(Error::PathTooLong {
                path: path.to_path_buf(),
                length,
                limit,
            });
        }

        Ok(())
    }
}

impl Default for Filesystem {
    fn default() -> Self {
        Self::new()
    }
}
