use std::ffi::OsStr;

/// Decides which dot-prefixed names are omitted from directory listings.
///
/// The same policy is applied on every platform, so a listing never depends on whether the
/// platform enumeration itself yields the `.` and `..` pseudo-entries.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum DotfilePolicy {
    /// Omit every entry whose name begins with `.`, including `.` and `..` themselves.
    #[default]
    ExcludeAll,

    /// Omit only the `.` and `..` pseudo-entries. Hidden files such as `.gitignore` are listed.
    ExcludeTraversal,
}

impl DotfilePolicy {
    #[must_use]
    pub(crate) fn is_visible(self, name: &OsStr) -> bool {
        match self {
            Self::ExcludeAll => !name.as_encoded_bytes().starts_with(b"."),
            Self::ExcludeTraversal => name != "." && name != "..",
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn default_excludes_all_dotfiles() {
        let policy = DotfilePolicy::default();

        assert_eq!(policy, DotfilePolicy::ExcludeAll);
        assert!(!policy.is_visible(OsStr::new(".")));
        assert!(!policy.is_visible(OsStr::new("..")));
        assert!(!policy.is_visible(OsStr::new(".hidden")));
        assert!(policy.is_visible(OsStr::new("visible")));
        assert!(policy.is_visible(OsStr::new("trailing.")));
    }

    #[test]
    fn traversal_only_keeps_hidden_files() {
        let policy = DotfilePolicy::ExcludeTraversal;

        assert!(!policy.is_visible(OsStr::new(".")));
        assert!(!policy.is_visible(OsStr::new("..")));
        assert!(policy.is_visible(OsStr::new(".hidden")));
        assert!(policy.is_visible(OsStr::new("...")));
        assert!(policy.is_visible(OsStr::new("visible")));
    }
}
