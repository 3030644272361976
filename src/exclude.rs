//! Directory exclusion rules for tree walks.
//!
//! A walk consults a [`DirectoryFilter`] for every directory it reaches,
//! including the root. When the filter says a directory is excluded, the
//! walk does not descend into it, so nothing below it is hashed.
//!
//! The default rule is a plain substring match against the full directory
//! path. `dosdevices` and `users` are where prefix layers keep device
//! mappings and per-user profiles; both are full of self-referential links
//! and neither belongs in a layer changeset. Because the match is on the
//! whole path, `/layers/base/users/bob` and `/layers/base/drive_c/allusers`
//! are both excluded, and so is everything when the root path itself
//! contains one of the substrings.

use std::path::Path;

/// Substrings excluded when no other rule is configured.
pub const DEFAULT_EXCLUDED_SUBSTRINGS: &[&str] = &["dosdevices", "users"];

/// Decides whether a directory (and its whole subtree) is left out of a snapshot.
pub trait DirectoryFilter: Send + Sync {
    fn should_exclude_directory(&self, path: &Path) -> bool;
}

impl<F> DirectoryFilter for F
where
    F: Fn(&Path) -> bool + Send + Sync,
{
    fn should_exclude_directory(&self, path: &Path) -> bool {
        self(path)
    }
}

/// Excludes any directory whose full path contains one of the substrings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstringFilter {
    substrings: Vec<String>,
}

impl SubstringFilter {
    pub fn new<I, S>(substrings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            substrings: substrings.into_iter().map(Into::into).collect(),
        }
    }

    /// A filter that excludes nothing.
    pub fn none() -> Self {
        Self {
            substrings: Vec::new(),
        }
    }

    pub fn substrings(&self) -> &[String] {
        &self.substrings
    }
}

impl Default for SubstringFilter {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED_SUBSTRINGS.iter().copied())
    }
}

impl DirectoryFilter for SubstringFilter {
    fn should_exclude_directory(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.substrings
            .iter()
            .any(|needle| path_str.contains(needle.as_str()))
    }
}
