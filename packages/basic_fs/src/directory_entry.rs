use std::ffi::{OsStr, OsString};

/// One immediate child of a listed directory.
///
/// The name is the bare file or directory name (never a full path), exactly as the platform
/// reported it. Whether the entry is a directory comes from the type information the platform
/// returns during enumeration, so no separate query is made per entry.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct DirectoryEntry {
    name: OsString,
    is_directory: bool,
}

impl DirectoryEntry {
    #[must_use]
    pub(crate) fn new(name: impl Into<OsString>, is_directory: bool) -> Self {
        Self {
            name: name.into(),
            is_directory,
        }
    }

    /// The name of the entry, without any parent path.
    #[must_use]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    /// Whether the entry is a directory.
    ///
    /// Symbolic links are classified the way the platform enumeration reports them.
    #[must_use]
    pub fn is_directory(&self) -> bool {
        self.is_directory
    }
}
