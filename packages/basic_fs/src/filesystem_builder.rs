use crate::pal::{DEFAULT_PATH_LEN_CEILING, PlatformFacade};
use crate::{DotfilePolicy, Filesystem};

/// Configures a [`Filesystem`] before creating it.
///
/// Start with [`Filesystem::builder()`]. Anything not configured keeps the default for the build
/// target: [`DotfilePolicy::ExcludeAll`] and the legacy listing path length ceiling of
/// [`LEGACY_MAX_LISTING_PATH_LEN`][crate::LEGACY_MAX_LISTING_PATH_LEN] characters on Windows
/// (no ceiling elsewhere).
#[derive(Clone, Debug)]
#[must_use]
pub struct FilesystemBuilder {
    platform: PlatformFacade,
    dotfile_policy: DotfilePolicy,
    path_len_ceiling: Option<usize>,
}

impl FilesystemBuilder {
    pub(crate) fn new(platform: PlatformFacade) -> Self {
        Self {
            platform,
            dotfile_policy: DotfilePolicy::default(),
            path_len_ceiling: DEFAULT_PATH_LEN_CEILING,
        }
    }

    /// Sets which dot-prefixed entries are omitted from listings.
    pub fn dotfile_policy(mut self, policy: DotfilePolicy) -> Self {
        self.dotfile_policy = policy;
        self
    }

    /// Fails any listing of a path longer than `max_len` characters, on every platform.
    pub fn path_len_ceiling(mut self, max_len: usize) -> Self {
        self.path_len_ceiling = Some(max_len);
        self
    }

    /// Removes the listing path length ceiling. The platform may still reject long paths itself.
    pub fn without_path_len_ceiling(mut self) -> Self {
        self.path_len_ceiling = None;
        self
    }

    /// Creates the configured filesystem.
    #[must_use]
    pub fn build(self) -> Filesystem {
        Filesystem::from_parts(self.platform, self.dotfile_policy, self.path_len_ceiling)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::pal::MockPlatform;

    #[test]
    fn starts_from_build_target_defaults() {
        let filesystem =
            FilesystemBuilder::new(PlatformFacade::from_mock(MockPlatform::new())).build();

        assert_eq!(filesystem.dotfile_policy(), DotfilePolicy::ExcludeAll);
        assert_eq!(filesystem.path_len_ceiling(), DEFAULT_PATH_LEN_CEILING);
    }

    #[test]
    fn last_ceiling_setting_wins() {
        let filesystem = Filesystem::builder()
            .without_path_len_ceiling()
            .path_len_ceiling(10)
            .build();
        assert_eq!(filesystem.path_len_ceiling(), Some(10));

        let filesystem = Filesystem::builder()
            .path_len_ceiling(10)
            .without_path_len_ceiling()
            .build();
        assert_eq!(filesystem.path_len_ceiling(), None);
    }

    #[test]
    fn applies_dotfile_policy() {
        let filesystem = Filesystem::builder()
            .dotfile_policy(DotfilePolicy::ExcludeTraversal)
            .build();

        assert_eq!(filesystem.dotfile_policy(), DotfilePolicy::ExcludeTraversal);
    }
}
