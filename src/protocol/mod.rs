//! Protocol Module
//!
//! Defines the JSON wire protocol spoken with the cache service.
//!
//! ## Endpoints
//! - `POST /api/v1/cache/get_all`   - fetch a batch of entries
//! - `POST /api/v1/cache/put_all`   - store a batch of entries
//! - `POST /api/v1/cache/evict_all` - evict a batch of entries
//!
//! ## Wire Format
//! Every body is a JSON array. Field names are single letters to keep large
//! batches small:
//! ```text
//! identifier: {"c": cache_name, "k": key}
//! entry:      {"c": cache_name, "k": key, "v": value}
//! result:     {"c": cache_name, "k": key, "v": value, "f": found}
//! ```

mod codec;
mod endpoint;
mod model;

pub use codec::{decode_results, encode_entries, encode_identifiers};
pub use endpoint::Endpoint;
pub use model::{CacheEntry, CacheEntryResult, CacheIdentifier};
