//! Client Module
//!
//! Batch operations against the cache service.
//!
//! ## Operations
//! - `fetch`: read a batch of entries, decoding values into the caller's type
//! - `store`: write a batch of entries
//! - `evict`: remove a batch of entries
//!
//! Each operation is one HTTP round trip with its own deadline. Empty batches
//! are sent as-is; the service decides what they mean.

use std::collections::HashMap;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Config;
use crate::error::Result;
use crate::protocol::{
    decode_results, encode_entries, encode_identifiers, CacheEntry, CacheEntryResult,
    CacheIdentifier, Endpoint,
};
use crate::transport::Transport;

/// HTTP client for the multi-level cache service
///
/// ## Concurrency
/// The client holds only immutable configuration and a pooled HTTP client.
/// Clone it or share it by reference across tasks; no locking is involved.
///
/// ## Cancellation
/// Dropping an operation future aborts the in-flight request and releases
/// its buffers. Racing it against a caller signal with `tokio::select!`
/// composes with the operation's own timeout.
#[derive(Debug, Clone)]
pub struct Client {
    transport: Transport,
}

impl Client {
    /// Create a client with default options (no compression, 5s timeouts)
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_gzip_threshold(base_url, 0)
    }

    /// Create a client that gzips request bodies of at least `threshold` bytes
    pub fn with_gzip_threshold(base_url: impl Into<String>, threshold: usize) -> Result<Self> {
        let config = Config::builder()
            .base_url(base_url)
            .gzip_threshold(threshold)
            .build()?;
        Ok(Self::with_config(config, reqwest::Client::new()))
    }

    /// Create a client from a full config and an injected HTTP client
    ///
    /// Trailing slashes on `config.base_url` are stripped here as well, for
    /// configs not produced by `ConfigBuilder::build`.
    pub fn with_config(mut config: Config, http: reqwest::Client) -> Self {
        config.normalize();
        tracing::debug!("Cache client for {}", config.base_url);
        Self {
            transport: Transport::new(http, Arc::new(config)),
        }
    }

    pub fn config(&self) -> &Config {
        self.transport.config()
    }

    /// Fetch a batch of entries
    ///
    /// Results come back in the order the service sent them. Values of
    /// found entries are decoded into `T`; a mismatch is a serialization
    /// error for the whole batch.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        ids: &[CacheIdentifier],
    ) -> Result<Vec<CacheEntryResult<T>>> {
        tracing::trace!("fetch: {} ids", ids.len());
        let payload = encode_identifiers(ids)?;
        let body = self.transport.send(Endpoint::Fetch, payload).await?;
        decode_results(&body)
    }

    /// Fetch a batch of entries keyed by identifier
    ///
    /// Use this when the service may reorder or omit results. Duplicate
    /// results for one identifier keep the last one received.
    pub async fn fetch_map<T: DeserializeOwned>(
        &self,
        ids: &[CacheIdentifier],
    ) -> Result<HashMap<CacheIdentifier, CacheEntryResult<T>>> {
        let results = self.fetch(ids).await?;
        Ok(results.into_iter().map(|r| (r.id(), r)).collect())
    }

    /// Store a batch of entries
    ///
    /// All entries share one value type. Mixed batches can use
    /// `CacheEntry<serde_json::Value>`.
    pub async fn store<T: Serialize>(&self, entries: &[CacheEntry<T>]) -> Result<()> {
        tracing::trace!("store: {} entries", entries.len());
        let payload = encode_entries(entries)?;
        self.transport.send(Endpoint::Store, payload).await?;
        Ok(())
    }

    /// Evict a batch of entries
    pub async fn evict(&self, ids: &[CacheIdentifier]) -> Result<()> {
        tracing::trace!("evict: {} ids", ids.len());
        let payload = encode_identifiers(ids)?;
        self.transport.send(Endpoint::Evict, payload).await?;
        Ok(())
    }
}
