use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Reasons a filesystem operation can fail.
///
/// Only the `try_` operations on [`Filesystem`][crate::Filesystem] surface these. The default
/// operations collapse every failure into an empty listing or a `false` result.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Nothing exists at the path, or one of its parent directories is missing.
    #[error("'{}' does not exist", .path.display())]
    NotFound {
        /// The path the operation was given.
        path: PathBuf,
    },

    /// The operating system refused access to the path.
    #[error("access to '{}' was denied", .path.display())]
    PermissionDenied {
        /// The path the operation was given.
        path: PathBuf,
    },

    /// The path (or one of its parents) exists but is not a directory.
    #[error("'{}' is not a directory", .path.display())]
    NotADirectory {
        /// The path the operation was given.
        path: PathBuf,
    },

    /// Directory creation found something other than a directory already at the path.
    #[error("'{}' already exists and is not a directory", .path.display())]
    AlreadyExistsNotDirectory {
        /// The path the operation was given.
        path: PathBuf,
    },

    /// The path is longer than the listing path length ceiling of the filesystem.
    #[error("'{}' is {length} characters long, exceeding the limit of {limit}", .path.display())]
    PathTooLong {
        /// The path the operation was given.
        path: PathBuf,

        /// Length of the path in characters.
        length: usize,

        /// The ceiling that was exceeded.
        limit: usize,
    },

    /// The path cannot be handed to the operating system, e.g. because it contains a NUL character.
    #[error("'{}' is not a valid path for this platform", .path.display())]
    InvalidPath {
        /// The path the operation was given.
        path: PathBuf,
    },

    /// Any other failure reported by the operating system.
    #[error("filesystem operation on '{}' failed", .path.display())]
    Unknown {
        /// The path the operation was given.
        path: PathBuf,

        /// The underlying platform error.
        source: io::Error,
    },
}

impl Error {
    /// Classifies a platform error. `AlreadyExists` is not special-cased here because its meaning
    /// depends on the operation; callers handle it before getting this far.
    pub(crate) fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();

        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            io::ErrorKind::NotADirectory => Self::NotADirectory { path },
            io::ErrorKind::InvalidInput => Self::InvalidPath { path },
            _ => Self::Unknown { path, source },
        }
    }
}

/// A specialized `Result` type for filesystem operations, returning the crate's
/// [`Error`] type as the error value.
pub type Result<T> = std::result::Result<T, Error>;
