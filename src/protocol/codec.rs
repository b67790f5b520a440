//! Protocol codec
//!
//! Encoding and decoding functions for batch bodies.
//!
//! ## Fetch Result Format
//! ```text
//! [{"c": "users", "k": "1", "v": {...}, "f": true},
//!  {"c": "users", "k": "2", "v": {},    "f": false}]
//! ```
//!
//! `v` is only decoded into the caller's type when `f` is true. For misses the
//! service may send any placeholder (or omit the field) and it is ignored.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{CacheEntry, CacheEntryResult, CacheIdentifier};
use crate::error::Result;

/// A fetch result as it appears on the wire, value still untyped
#[derive(Deserialize)]
struct WireResult {
    c: String,
    k: String,
    #[serde(default)]
    v: Value,
    f: bool,
}

// =============================================================================
// Request Encoding
// =============================================================================

/// Encode identifiers as `[{"c":..,"k":..}, ...]`
pub fn encode_identifiers(ids: &[CacheIdentifier]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(ids)?)
}

/// Encode entries as `[{"c":..,"k":..,"v":..}, ...]`
///
/// Fails only when a value's `Serialize` impl cannot produce JSON
/// (e.g. a map with non-string keys).
pub fn encode_entries<T: Serialize>(entries: &[CacheEntry<T>]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(entries)?)
}

// =============================================================================
// Response Decoding
// =============================================================================

/// Decode a fetch response body
///
/// Results keep the order the service sent them in. The count is not
/// checked against the request.
pub fn decode_results<T: DeserializeOwned>(bytes: &[u8]) -> Result<Vec<CacheEntryResult<T>>> {
    let wire: Vec<WireResult> = serde_json::from_slice(bytes)?;

    wire.into_iter()
        .map(|hit| -> Result<CacheEntryResult<T>> {
            let value = if hit.f {
                Some(serde_json::from_value(hit.v)?)
            } else {
                None
            };
            Ok(CacheEntryResult {
                cache_name: hit.c,
                key: hit.k,
                value,
            })
        })
        .collect()
}
