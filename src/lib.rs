//! layerdiff: content-level changesets between directory trees
//!
//! Snapshots a "parent" and a "child" tree, fingerprinting every regular
//! file by content, and reports which relative paths were added, removed or
//! changed in the child. Used to summarize a filesystem layer (a snapshot,
//! an overlay, a prefix layer) against its baseline.
//!
//! ```no_run
//! let result = layerdiff::compare("/layers/base", "/layers/top")?;
//! for path in &result.added {
//!     println!("added {}", path);
//! }
//! # Ok::<(), layerdiff::DiffError>(())
//! ```

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod exclude;
pub mod logging;
pub mod tree;
pub mod types;

pub use diff::{compare, CompareOptions, Comparator, DiffResult};
pub use error::{DiffError, Result};
pub use exclude::{DirectoryFilter, SubstringFilter, DEFAULT_EXCLUDED_SUBSTRINGS};
pub use tree::{TreeHasher, TreeSnapshot, UnreadablePolicy, WalkerConfig};
pub use types::Fingerprint;
