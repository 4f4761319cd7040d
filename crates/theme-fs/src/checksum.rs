//! SHA-256 checksum utilities
//!
//! One canonical checksum format (`sha256:<hex>`) used to tell whether a
//! restored file still matches its backup.

use sha2::{Digest, Sha256};

use crate::{Error, NormalizedPath, Result};

/// Prefix for all checksums produced by this module
const PREFIX: &str = "sha256:";

/// Compute the SHA-256 checksum of in-memory bytes.
pub fn compute_content_checksum(content: impl AsRef<[u8]>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_ref());
    format!("{}{:x}", PREFIX, hasher.finalize())
}

/// Compute the SHA-256 checksum of a file's contents.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn compute_file_checksum(path: &NormalizedPath) -> Result<String> {
    let native = path.to_native();
    let content = std::fs::read(&native).map_err(|e| Error::io(&native, e))?;
    Ok(compute_content_checksum(content))
}

/// Checksum a tree entry without following symlinks.
///
/// A symlink is identified by its target path, so dangling links and links
/// to directories compare like any other entry.
pub fn compute_entry_checksum(path: &NormalizedPath) -> Result<String> {
    let native = path.to_native();
    let metadata = std::fs::symlink_metadata(&native).map_err(|e| Error::io(&native, e))?;
    if metadata.file_type().is_symlink() {
        let target = std::fs::read_link(&native).map_err(|e| Error::io(&native, e))?;
        let target = NormalizedPath::new(target);
        return Ok(compute_content_checksum(format!("symlink:{}", target)));
    }
    compute_file_checksum(path)
}
