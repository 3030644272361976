//! Tree hashing
//!
//! Turns a directory root into a [`TreeSnapshot`]: every regular file
//! below the root, keyed by its path relative to the root, mapped to a
//! fingerprint of its content.

pub mod hasher;
pub mod path;
pub mod snapshot;
pub mod walker;

pub use snapshot::TreeSnapshot;
pub use walker::{TreeHasher, UnreadablePolicy, WalkerConfig};
