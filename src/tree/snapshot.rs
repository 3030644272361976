//! Snapshot of a directory tree: relative key to content fingerprint

use crate::types::Fingerprint;
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Fingerprints of every non-excluded regular file under a root.
///
/// Keys are relative to the root, use the platform separator and never
/// start with one. A snapshot is assembled by the walker and read-only once
/// handed out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeSnapshot {
    root: PathBuf,
    entries: BTreeMap<String, Fingerprint>,
    skipped: Vec<String>,
}

impl TreeSnapshot {
    pub(crate) fn new(root: PathBuf) -> Self {
        Self {
            root,
            entries: BTreeMap::new(),
            skipped: Vec::new(),
        }
    }

    /// Insert an entry. A repeated key overwrites the earlier fingerprint.
    ///
    /// A walk yields each file once, so a repeat means the traversal visited
    /// the same relative path twice; it is logged and the later write wins.
    pub(crate) fn insert(&mut self, key: String, fingerprint: Fingerprint) {
        if let Some(previous) = self.entries.insert(key.clone(), fingerprint) {
            warn!(
                root = %self.root.display(),
                key = %key,
                previous = %previous,
                current = %fingerprint,
                "Duplicate snapshot key; keeping the later fingerprint"
            );
        }
    }

    pub(crate) fn record_skipped(&mut self, key: String) {
        self.skipped.push(key);
    }

    /// Root the snapshot was taken from, as given by the caller
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn get(&self, key: &str) -> Option<&Fingerprint> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order
    pub fn iter(&self) -> btree_map::Iter<'_, String, Fingerprint> {
        self.entries.iter()
    }

    pub fn keys(&self) -> btree_map::Keys<'_, String, Fingerprint> {
        self.entries.keys()
    }

    /// Keys of files, and of directories that could not be listed, left out
    /// of the snapshot. A directory key stands for everything below it.
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }
}

impl<'a> IntoIterator for &'a TreeSnapshot {
    type Item = (&'a String, &'a Fingerprint);
    type IntoIter = btree_map::Iter<'a, String, Fingerprint>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
