#![cfg_attr(coverage_nightly, coverage(off))]

use std::ffi::CStr;
use std::fmt::Debug;
use std::io;
use std::ptr::NonNull;
#[cfg(test)]
use std::sync::Arc;

use libc::{DIR, mode_t};

#[cfg(test)]
use crate::pal::posix::MockBindings;
use crate::pal::posix::{Bindings, BuildTargetBindings, RawDirectoryEntry};

/// Enum to hide the real/mock choice behind a single wrapper type.
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
    fn opendir(&self, path: &CStr) -> io::Result<NonNull<DIR>> {
        match self {
            Self::Target(bindings) => bindings.opendir(path),
            #[cfg(test)]
            Self::Mock(mock) => mock.opendir(path),
        }
    }

    unsafe fn readdir(&self, dir: NonNull<DIR>) -> io::Result<Option<RawDirectoryEntry>> {
        match self {
            // SAFETY: Forwarding safety requirements to caller.
            Self::Target(bindings) => unsafe { bindings.readdir(dir) },
            #[cfg(test)]
            // SAFETY: Forwarding safety requirements to caller.
            Self::Mock(mock) => unsafe { mock.readdir(dir) },
        }
    }

    unsafe fn closedir(&self, dir: NonNull<DIR>) {
        match self {
            // SAFETY: Forwarding safety requirements to caller.
            Self::Target(bindings) => unsafe { bindings.closedir(dir) },
            #[cfg(test)]
            // SAFETY: Forwarding safety requirements to caller.
            Self::Mock(mock) => unsafe { mock.closedir(dir) },
        }
    }

    fn mkdir(&self, path: &CStr, mode: mode_t) -> io::Result<()> {
        match self {
            Self::Target(bindings) => bindings.mkdir(path, mode),
            #[cfg(test)]
            Self::Mock(mock) => mock.mkdir(path, mode),
        }
    }

    fn stat_mode(&self, path: &CStr) -> io::Result<mode_t> {
        match self {
            Self::Target(bindings) => bindings.stat_mode(path),
            #[cfg(test)]
            Self::Mock(mock) => mock.stat_mode(path),
        }
    }

    fn lstat_mode(&self, path: &CStr) -> io::Result<mode_t> {
        match self {
            Self::Target(bindings) => bindings.lstat_mode(path),
            #[cfg(test)]
            Self::Mock(mock) => mock.lstat_mode(path),
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
