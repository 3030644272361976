//! Content fingerprints for files using SHA-1

use crate::error::{DiffError, Result};
use crate::types::Fingerprint;
use sha1::{Digest, Sha1};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

/// Compute the fingerprint of in-memory content
pub fn compute_content_hash(content: &[u8]) -> Fingerprint {
    let mut hasher = Sha1::new();
    hasher.update(content);
    Fingerprint::from_bytes(hasher.finalize().into())
}

/// Compute the fingerprint of a file's full byte content.
///
/// The file is streamed through the hasher rather than loaded whole, so
/// large layer blobs do not need to fit in memory.
pub fn hash_file(path: &Path) -> Result<Fingerprint> {
    let file = File::open(path).map_err(|e| DiffError::io(path, e))?;
    let mut reader = BufReader::new(file);
    let mut hasher = Sha1::new();
    io::copy(&mut reader, &mut hasher).map_err(|e| DiffError::io(path, e))?;
    Ok(Fingerprint::from_bytes(hasher.finalize().into()))
}
