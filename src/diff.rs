//! Tree comparison: classify files as added, removed or changed.
//!
//! Both roots are snapshotted independently, then the two snapshots are
//! reduced with plain set algebra. A path that is in neither `added`,
//! `removed` nor `changed` is unchanged. Renames are not detected; a moved
//! file shows up as one removal and one addition.

use crate::error::{DiffError, Result};
use crate::exclude::{DirectoryFilter, SubstringFilter, DEFAULT_EXCLUDED_SUBSTRINGS};
use crate::tree::walker::validate_root;
use crate::tree::{TreeHasher, TreeSnapshot, UnreadablePolicy, WalkerConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, MAIN_SEPARATOR};
use std::sync::Arc;
use std::thread;
use tracing::{debug, info};

/// Changeset of `child` relative to `parent`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffResult {
    /// Present in child, absent in parent
    pub added: Vec<String>,
    /// Present in parent, absent in child
    pub removed: Vec<String>,
    /// Present in both with different content
    pub changed: Vec<String>,
    /// Left out of the comparison because they could not be read. A
    /// directory entry covers every path below it.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<String>,
}

impl DiffResult {
    /// True when no file was added, removed or changed
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }

    /// Number of added, removed and changed paths
    pub fn len(&self) -> usize {
        self.added.len() + self.removed.len() + self.changed.len()
    }
}

/// Options for a comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareOptions {
    /// Directories whose full path contains any of these are not walked
    #[serde(default = "default_exclude_substrings")]
    pub exclude_substrings: Vec<String>,

    /// Descend through symbolic links to directories
    #[serde(default)]
    pub follow_symlinks: bool,

    /// Snapshot parent and child on separate threads
    #[serde(default = "default_true")]
    pub parallel: bool,

    /// Handling of files that cannot be read
    #[serde(default)]
    pub on_unreadable: UnreadablePolicy,
}

fn default_exclude_substrings() -> Vec<String> {
    DEFAULT_EXCLUDED_SUBSTRINGS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_true() -> bool {
    true
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            exclude_substrings: default_exclude_substrings(),
            follow_symlinks: false,
            parallel: default_true(),
            on_unreadable: UnreadablePolicy::default(),
        }
    }
}

impl CompareOptions {
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.exclude_substrings.iter().any(|s| s.is_empty()) {
            return Err("Exclude substrings cannot be empty (an empty one excludes everything)".to_string());
        }
        Ok(())
    }

    fn walker_config(&self) -> WalkerConfig {
        WalkerConfig {
            follow_symlinks: self.follow_symlinks,
            on_unreadable: self.on_unreadable,
        }
    }
}

/// Compares two directory trees
pub struct Comparator {
    options: CompareOptions,
    filter: Arc<dyn DirectoryFilter>,
}

impl Comparator {
    /// Comparator excluding directories by `options.exclude_substrings`.
    ///
    /// Fails with `Config` when the options do not validate; an empty
    /// substring would otherwise exclude every directory.
    pub fn new(options: CompareOptions) -> Result<Self> {
        options.validate().map_err(DiffError::Config)?;
        Ok(Self::from_valid(options))
    }

    fn from_valid(options: CompareOptions) -> Self {
        let filter = Arc::new(SubstringFilter::new(options.exclude_substrings.clone()));
        Self { options, filter }
    }

    /// Comparator with a caller-supplied exclusion rule.
    ///
    /// `options.exclude_substrings` is ignored; `filter` alone decides.
    pub fn with_filter(options: CompareOptions, filter: Arc<dyn DirectoryFilter>) -> Self {
        Self { options, filter }
    }

    pub fn options(&self) -> &CompareOptions {
        &self.options
    }

    /// Snapshot one root with this comparator's settings
    pub fn snapshot(&self, root: &Path) -> Result<TreeSnapshot> {
        self.hasher(root).snapshot()
    }

    /// Compare `child` against `parent`.
    ///
    /// Both roots are checked before either tree is read, so a bad root is
    /// always reported as `InvalidRoot`.
    pub fn compare(&self, parent: &Path, child: &Path) -> Result<DiffResult> {
        validate_root(parent)?;
        validate_root(child)?;

        debug!(
            parent = %parent.display(),
            child = %child.display(),
            parallel = self.options.parallel,
            "Comparing trees"
        );

        let (parent_snapshot, child_snapshot) = if self.options.parallel {
            let parent_hasher = self.hasher(parent);
            let child_hasher = self.hasher(child);
            thread::scope(|scope| {
                let parent_handle = scope.spawn(move || parent_hasher.snapshot());
                let child_result = child_hasher.snapshot();
                let parent_result = parent_handle
                    .join()
                    .unwrap_or_else(|panic| std::panic::resume_unwind(panic));
                (parent_result, child_result)
            })
        } else {
            (self.snapshot(parent), self.snapshot(child))
        };

        let result = Self::compare_snapshots(&parent_snapshot?, &child_snapshot?);

        info!(
            added = result.added.len(),
            removed = result.removed.len(),
            changed = result.changed.len(),
            skipped = result.skipped.len(),
            "Comparison complete"
        );

        Ok(result)
    }

    /// Reduce two snapshots into a changeset.
    ///
    /// Skipped keys of either side are reported only in `skipped`, never as
    /// added, removed or changed, since their content is unknown. A skipped
    /// directory also hides every key below it.
    pub fn compare_snapshots(parent: &TreeSnapshot, child: &TreeSnapshot) -> DiffResult {
        let mut skipped: Vec<String> = parent
            .skipped()
            .iter()
            .chain(child.skipped())
            .cloned()
            .collect();
        skipped.sort();
        skipped.dedup();
        let is_skipped = |key: &str| skipped.iter().any(|prefix| covers(prefix, key));

        let mut result = DiffResult::default();

        for (key, fingerprint) in child {
            if is_skipped(key) {
                continue;
            }
            match parent.get(key) {
                None => result.added.push(key.clone()),
                Some(previous) if previous != fingerprint => result.changed.push(key.clone()),
                Some(_) => {}
            }
        }

        for key in parent.keys() {
            if is_skipped(key) {
                continue;
            }
            if !child.contains_key(key) {
                result.removed.push(key.clone());
            }
        }

        result.skipped = skipped;
        result
    }

    fn hasher(&self, root: &Path) -> TreeHasher {
        TreeHasher::with_config(root, self.options.walker_config(), Arc::clone(&self.filter))
    }
}

impl Default for Comparator {
    fn default() -> Self {
        Self::from_valid(CompareOptions::default())
    }
}

/// True when `key` is `prefix` itself or lies below it.
fn covers(prefix: &str, key: &str) -> bool {
    match key.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with(MAIN_SEPARATOR),
        None => false,
    }
}

/// Compare `child` against `parent` with default options.
pub fn compare(parent: impl AsRef<Path>, child: impl AsRef<Path>) -> Result<DiffResult> {
    Comparator::default().compare(parent.as_ref(), child.as_ref())
}
