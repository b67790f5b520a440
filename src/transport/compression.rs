//! Request body compression
//!
//! Pure size-based policy: content is never inspected.

use std::io::Write;

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::{CacheError, Result};

/// Whether a body of `len` bytes must be compressed
///
/// A threshold of 0 disables compression. A body exactly at the threshold
/// is compressed.
pub fn should_compress(len: usize, threshold: usize) -> bool {
    threshold > 0 && len >= threshold
}

/// Gzip `payload` with the default compression level
pub fn gzip(payload: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::with_capacity(payload.len() / 2), Compression::default());
    encoder.write_all(payload).map_err(CacheError::Compression)?;
    encoder.finish().map_err(CacheError::Compression)
}
