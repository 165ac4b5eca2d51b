//! Utility functions for Morpho.

use std::fs;
use std::path::Path;

use crate::error::{MorphoError, Result};

/// Maximum corpus file size that can be read into memory (50 MB).
///
/// The vocabulary datasets are a few megabytes at most; this limit guards
/// against reading an unexpectedly large file into memory.
pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024; // 50 MB

/// Read a file into a string with size limit protection.
///
/// # Errors
///
/// Returns an error if:
/// * The file cannot be read (doesn't exist, permission denied, etc.)
/// * The file exceeds `MAX_FILE_SIZE`
pub fn read_to_string_limited(path: &Path) -> Result<String> {
    read_to_string_with_limit(path, MAX_FILE_SIZE)
}

/// Read a file into a string with a custom size limit.
///
/// # Errors
///
/// Returns an error if the file exceeds `max_size` or cannot be read.
pub fn read_to_string_with_limit(path: &Path, max_size: u64) -> Result<String> {
    let metadata = fs::metadata(path).map_err(|e| MorphoError::corpus(path, e))?;

    let size = metadata.len();
    if size > max_size {
        return Err(MorphoError::corpus(
            path,
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("file is too large ({size} bytes, max {max_size} bytes)"),
            ),
        ));
    }

    fs::read_to_string(path).map_err(|e| MorphoError::corpus(path, e))
}
