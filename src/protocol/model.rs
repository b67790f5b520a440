//! Batch item definitions
//!
//! Identifiers and entries serialize straight to their wire form.

use serde::{Deserialize, Serialize};

/// Identifies one entry within one named cache
///
/// Cache name and key are opaque; keys are unique only within a cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheIdentifier {
    #[serde(rename = "c")]
    cache_name: String,

    #[serde(rename = "k")]
    key: String,
}

impl CacheIdentifier {
    pub fn new(cache_name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            cache_name: cache_name.into(),
            key: key.into(),
        }
    }

    pub fn cache_name(&self) -> &str {
        &self.cache_name
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

/// A value to store under a cache name and key
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheEntry<T> {
    #[serde(rename = "c")]
    pub cache_name: String,

    #[serde(rename = "k")]
    pub key: String,

    #[serde(rename = "v")]
    pub value: T,
}

impl<T> CacheEntry<T> {
    pub fn new(cache_name: impl Into<String>, key: impl Into<String>, value: T) -> Self {
        Self {
            cache_name: cache_name.into(),
            key: key.into(),
            value,
        }
    }

    /// Identifier this entry is stored under
    pub fn id(&self) -> CacheIdentifier {
        CacheIdentifier::new(self.cache_name.clone(), self.key.clone())
    }
}

/// Outcome of fetching a single entry
///
/// `value` is `None` when the service reported the key as missing, so a
/// placeholder value sent for a miss is never mistaken for a stored one.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntryResult<T> {
    pub cache_name: String,
    pub key: String,
    pub value: Option<T>,
}

impl<T> CacheEntryResult<T> {
    /// Whether the key existed in the cache at read time
    pub fn is_found(&self) -> bool {
        self.value.is_some()
    }

    pub fn id(&self) -> CacheIdentifier {
        CacheIdentifier::new(self.cache_name.clone(), self.key.clone())
    }

    /// Stored value, or `T::default()` on a miss
    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        self.value.unwrap_or_default()
    }

    pub fn into_value(self) -> Option<T> {
        self.value
    }
}
