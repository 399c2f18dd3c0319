use std::fmt::Debug;
use std::io;
use std::path::Path;

use crate::DirectoryEntry;

/// What currently occupies a path.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum PathKind {
    Directory,

    /// Regular file, device, socket or anything else that is not a directory.
    Other,
}

/// The filesystem operations every backend provides.
///
/// Backends report raw platform outcomes. Dotfile filtering, the listing path length ceiling and
/// the collapse of failures into empty/`false` results all happen in the public API layer, so
/// every backend ends up with identical observable behavior.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait Platform: Debug + Send + Sync + 'static {
    /// Enumerates the immediate children of a directory, including any `.` and `..`
    /// pseudo-entries the platform yields. Partial results are never returned.
    fn read_directory(&self, path: &Path) -> io::Result<Vec<DirectoryEntry>>;

    /// Creates exactly one directory with the default directory mode.
    ///
    /// Reports `io::ErrorKind::AlreadyExists` if anything already occupies the path.
    fn create_directory(&self, path: &Path) -> io::Result<()>;

    /// Queries what occupies the path, following symbolic links.
    ///
    /// `None` if nothing is there or the path cannot be queried.
    fn path_kind(&self, path: &Path) -> Option<PathKind>;
}
