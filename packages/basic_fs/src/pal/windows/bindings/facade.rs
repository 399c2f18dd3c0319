#![cfg_attr(coverage_nightly, coverage(off))]

use std::fmt::Debug;
#[cfg(test)]
use std::sync::Arc;

use windows::Win32::Foundation::HANDLE;
use windows::Win32::Storage::FileSystem::WIN32_FIND_DATAW;
use windows::core::Result;

#[cfg(test)]
use crate::pal::windows::MockBindings;
use crate::pal::windows::{Bindings, BuildTargetBindings};

/// Hide the real/mock bindings choice behind a single type.
#[derive(Clone)]
pub(crate) enum BindingsFacade {
    Target(&'static BuildTargetBindings),

    #[cfg(test)]
    Mock(Arc<MockBindings>),
}

impl BindingsFacade {
    pub(crate) const fn target() -> Self {
        Self::Target(&BuildTargetBindings)
    }

    #[cfg(test)]
    pub(crate) fn from_mock(mock: MockBindings) -> Self {
        Self::Mock(Arc::new(mock))
    }
}

impl Bindings for BindingsFacade {
    fn find_first_file(
        &self,
        pattern: &[u16],
        find_data: &mut WIN32_FIND_DATAW,
    ) -> Result<HANDLE> {
        match self {
            Self::Target(bindings) => bindings.find_first_file(pattern, find_data),
            #[cfg(test)]
            Self::Mock(bindings) => bindings.find_first_file(pattern, find_data),
        }
    }

    fn find_next_file(&self, handle: HANDLE, find_data: &mut WIN32_FIND_DATAW) -> Result<()> {
        match self {
            Self::Target(bindings) => bindings.find_next_file(handle, find_data),
            #[cfg(test)]
            Self::Mock(bindings) => bindings.find_next_file(handle, find_data),
        }
    }

    fn find_close(&self, handle: HANDLE) -> Result<()> {
        match self {
            Self::Target(bindings) => bindings.find_close(handle),
            #[cfg(test)]
            Self::Mock(bindings) => bindings.find_close(handle),
        }
    }

    fn create_directory(&self, path: &[u16]) -> Result<()> {
        match self {
            Self::Target(bindings) => bindings.create_directory(path),
            #[cfg(test)]
            Self::Mock(bindings) => bindings.create_directory(path),
        }
    }

    fn get_file_attributes(&self, path: &[u16]) -> u32 {
        match self {
            Self::Target(bindings) => bindings.get_file_attributes(path),
            #[cfg(test)]
            Self::Mock(bindings) => bindings.get_file_attributes(path),
        }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))] // No API contract to test.
impl Debug for BindingsFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Target(inner) => inner.fmt(f),
            #[cfg(test)]
            Self::Mock(inner) => inner.fmt(f),
        }
    }
}
