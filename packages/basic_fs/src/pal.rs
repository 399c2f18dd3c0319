//! Platform Abstraction Layer (PAL). Exactly one backend is selected at build time and the
//! public API only ever talks to it through `PlatformFacade`.
//!
//! Each backend exports `BuildTargetPlatform`, its `BUILD_TARGET_PLATFORM` singleton and the
//! `DEFAULT_PATH_LEN_CEILING` that new filesystems start with.

mod abstractions;
pub(crate) use abstractions::*;

mod facade;
pub(crate) use facade::*;

#[cfg(all(any(target_os = "linux", target_os = "macos"), not(miri)))]
mod posix;
#[cfg(all(any(target_os = "linux", target_os = "macos"), not(miri)))]
pub(crate) use posix::*;

#[cfg(all(windows, not(miri)))]
mod windows;
#[cfg(all(windows, not(miri)))]
pub(crate) use windows::*;

// The fallback module is compiled in test mode on all platforms, under Miri, and as the primary
// implementation on unsupported platforms. However, we only glob-import it when it is the primary
// implementation (i.e. on unsupported platforms or under Miri). On supported platforms in test
// mode, it must be accessed via the explicit path `fallback::` to avoid ambiguity with the
// platform-specific implementation.
#[cfg(any(
    test,
    miri,
    not(any(target_os = "linux", target_os = "macos", windows))
))]
pub(crate) mod fallback;

#[cfg(any(miri, not(any(target_os = "linux", target_os = "macos", windows))))]
pub(crate) use fallback::*;
