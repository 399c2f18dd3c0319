use std::fmt::Debug;
use std::io;
use std::path::Path;
#[cfg(test)]
use std::sync::Arc;

use crate::DirectoryEntry;
#[cfg(test)]
use crate::pal::MockPlatform;
use crate::pal::{BUILD_TARGET_PLATFORM, BuildTargetPlatform, PathKind, Platform};

/// Enum to hide the real/mock platform choice behind a single wrapper type.
#[derive(Clone)]
pub(crate) enum PlatformFacade {
    Target(&'static BuildTargetPlatform),

    #[cfg(test)]
    Mock(Arc<MockPlatform>),
}

impl PlatformFacade {
    pub(crate) fn target() -> Self {
        Self::Target(&BUILD_TARGET_PLATFORM)
    }

    #[cfg(test)]
    pub(crate) fn from_mock(mock: MockPlatform) -> Self {
        Self::Mock(Arc::new(mock))
    }
}

impl Platform for PlatformFacade {
    fn read_directory(&self, path: &Path) -> io::Result<Vec<DirectoryEntry>> {
        match self {
            Self::Target(platform) => platform.read_directory(path),
            #[cfg(test)]
            Self::Mock(mock) => mock.read_directory(path),
        }
    }

    fn create_directory(&self, path: &Path) -> io::Result<()> {
        match self {
            Self::Target(platform) => platform.create_directory(path),
            #[cfg(test)]
            Self::Mock(mock) => mock.create_directory(path),
        }
    }

    fn path_kind(&self, path: &Path) -> Option<PathKind> {
        match self {
            Self::Target(platform) => platform.path_kind(path),
            #[cfg(test)]
            Self::Mock(mock) => mock.path_kind(path),
        }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))] // No API contract to test.
impl Debug for PlatformFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Target(inner) => inner.fmt(f),
            #[cfg(test)]
            Self::Mock(inner) => inner.fmt(f),
        }
    }
}
