use std::path::Path;

use crate::{DirectoryEntry, Filesystem};

/// Lists the immediate children of a directory using the default [`Filesystem`].
///
/// Returns an empty vector on any failure. See [`Filesystem::list_directory()`].
#[must_use]
pub fn list_directory(path: impl AsRef<Path>) -> Vec<DirectoryEntry> {
    Filesystem::new().list_directory(path)
}

/// Ensures a directory exists using the default [`Filesystem`].
///
/// See [`Filesystem::create_directory()`].
#[must_use]
pub fn create_directory(path: impl AsRef<Path>) -> bool {
    Filesystem::new().create_directory(path)
}

/// Whether anything exists at the path, using the default [`Filesystem`].
///
/// See [`Filesystem::path_exists()`].
#[must_use]
pub fn path_exists(path: impl AsRef<Path>) -> bool {
    Filesystem::new().path_exists(path)
}
