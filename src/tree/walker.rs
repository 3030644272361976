//! Filesystem walker that builds a [`TreeSnapshot`] for one root

use crate::error::{DiffError, Result};
use crate::exclude::{DirectoryFilter, SubstringFilter};
use crate::tree::hasher;
use crate::tree::path::{normalize_root, relative_key};
use crate::tree::snapshot::TreeSnapshot;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, trace, warn};
use walkdir::WalkDir;

/// What to do with a file or directory that cannot be read during a walk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnreadablePolicy {
    /// Abort the whole walk on the first read failure
    #[default]
    Strict,
    /// Log the failure, leave the entry out and record it as skipped
    Skip,
}

impl FromStr for UnreadablePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "strict" => Ok(UnreadablePolicy::Strict),
            "skip" => Ok(UnreadablePolicy::Skip),
            other => Err(format!(
                "Invalid unreadable policy: {} (must be 'strict' or 'skip')",
                other
            )),
        }
    }
}

impl fmt::Display for UnreadablePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnreadablePolicy::Strict => f.write_str("strict"),
            UnreadablePolicy::Skip => f.write_str("skip"),
        }
    }
}

/// Walker configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WalkerConfig {
    /// Descend through symbolic links to directories (default: false)
    pub follow_symlinks: bool,
    /// Handling of unreadable entries (default: strict)
    pub on_unreadable: UnreadablePolicy,
}

/// Check that `root` exists and is a directory.
pub(crate) fn validate_root(root: &Path) -> Result<()> {
    let metadata = fs::metadata(root).map_err(|e| DiffError::InvalidRoot {
        path: root.to_path_buf(),
        reason: e.to_string(),
    })?;
    if !metadata.is_dir() {
        return Err(DiffError::InvalidRoot {
            path: root.to_path_buf(),
            reason: "not a directory".to_string(),
        });
    }
    Ok(())
}

/// Walks one root and fingerprints every regular file below it.
pub struct TreeHasher {
    root: PathBuf,
    config: WalkerConfig,
    filter: Arc<dyn DirectoryFilter>,
}

impl TreeHasher {
    /// Walker with default configuration and the default exclusion rule
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_config(
            root,
            WalkerConfig::default(),
            Arc::new(SubstringFilter::default()),
        )
    }

    pub fn with_config(
        root: impl Into<PathBuf>,
        config: WalkerConfig,
        filter: Arc<dyn DirectoryFilter>,
    ) -> Self {
        Self {
            root: root.into(),
            config,
            filter,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the root and build its snapshot.
    ///
    /// Fails with `InvalidRoot` before reading anything when the root is
    /// missing or not a directory.
    pub fn snapshot(&self) -> Result<TreeSnapshot> {
        validate_root(&self.root)?;

        let normalized = normalize_root(&self.root);
        let mut snapshot = TreeSnapshot::new(self.root.clone());
        let filter = Arc::clone(&self.filter);

        let walker = WalkDir::new(&normalized)
            .follow_links(self.config.follow_symlinks)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| {
                if !entry.file_type().is_dir() {
                    return true;
                }
                if filter.should_exclude_directory(entry.path()) {
                    debug!(path = %entry.path().display(), "Excluding directory");
                    return false;
                }
                true
            });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    // Nothing below the failing path is known; record it as a skipped prefix.
                    let failed = err.path().and_then(|p| relative_key(&normalized, p));
                    let err = DiffError::from_walk(&self.root, err);
                    match failed {
                        Some(key) => {
                            self.tolerate(err)?;
                            snapshot.record_skipped(key);
                        }
                        // The root itself could not be listed: no partial snapshot.
                        None => return Err(err),
                    }
                    continue;
                }
            };

            let path = entry.path();
            let Some(key) = relative_key(&normalized, path) else {
                continue;
            };

            let is_file = if entry.file_type().is_file() {
                true
            } else if entry.file_type().is_symlink() {
                // Unfollowed link: hash it when it points at a file, never descend.
                match fs::metadata(path) {
                    Ok(metadata) => metadata.is_file(),
                    Err(e) => {
                        self.tolerate(DiffError::io(path, e))?;
                        snapshot.record_skipped(key);
                        continue;
                    }
                }
            } else {
                false
            };

            if !is_file {
                continue;
            }

            match hasher::hash_file(path) {
                Ok(fingerprint) => {
                    trace!(key = %key, fingerprint = %fingerprint, "Hashed file");
                    snapshot.insert(key, fingerprint);
                }
                Err(err) => {
                    self.tolerate(err)?;
                    snapshot.record_skipped(key);
                }
            }
        }

        debug!(
            root = %self.root.display(),
            files = snapshot.len(),
            skipped = snapshot.skipped().len(),
            "Snapshot complete"
        );

        Ok(snapshot)
    }

    /// Apply the unreadable policy: propagate under strict, log under skip.
    fn tolerate(&self, err: DiffError) -> Result<()> {
        match self.config.on_unreadable {
            UnreadablePolicy::Strict => Err(err),
            UnreadablePolicy::Skip => {
                warn!(root = %self.root.display(), error = %err, "Skipping unreadable entry");
                Ok(())
            }
        }
    }
}
