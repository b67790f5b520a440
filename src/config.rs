//! Configuration for tiercache
//!
//! Centralized client configuration with sensible defaults.

use std::time::Duration;

use crate::error::{CacheError, Result};
use crate::protocol::Endpoint;

/// Default timeout applied to every operation (milliseconds)
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Client configuration, immutable once built
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Endpoint Configuration
    // -------------------------------------------------------------------------
    /// Base URL of the cache service, without trailing slash
    pub base_url: String,

    // -------------------------------------------------------------------------
    // Compression Configuration
    // -------------------------------------------------------------------------
    /// Request bodies of at least this many bytes are gzip-compressed.
    /// 0 disables compression.
    pub gzip_threshold: usize,

    // -------------------------------------------------------------------------
    // Timeout Configuration
    // -------------------------------------------------------------------------
    /// Deadline for fetch calls (milliseconds)
    pub fetch_timeout_ms: u64,

    /// Deadline for store calls (milliseconds)
    pub store_timeout_ms: u64,

    /// Deadline for evict calls (milliseconds)
    pub evict_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
            gzip_threshold: 0,
            fetch_timeout_ms: DEFAULT_TIMEOUT_MS,
            store_timeout_ms: DEFAULT_TIMEOUT_MS,
            evict_timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Timeout configured for the given endpoint
    pub fn timeout_for(&self, endpoint: Endpoint) -> Duration {
        let ms = match endpoint {
            Endpoint::Fetch => self.fetch_timeout_ms,
            Endpoint::Store => self.store_timeout_ms,
            Endpoint::Evict => self.evict_timeout_ms,
        };
        Duration::from_millis(ms)
    }

    /// Absolute URL for the given endpoint
    ///
    /// Trailing slashes on the base URL are ignored, so a config built by
    /// struct literal never yields a doubled slash.
    pub fn url_for(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), endpoint.path())
    }

    /// Strip trailing slashes from the base URL in place
    pub fn normalize(&mut self) {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        if trimmed.len() != self.base_url.len() {
            self.base_url = trimmed.to_string();
        }
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the base URL of the cache service
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the gzip threshold (in bytes, 0 disables)
    pub fn gzip_threshold(mut self, bytes: usize) -> Self {
        self.config.gzip_threshold = bytes;
        self
    }

    /// Set the fetch timeout (in milliseconds)
    pub fn fetch_timeout_ms(mut self, ms: u64) -> Self {
        self.config.fetch_timeout_ms = ms;
        self
    }

    /// Set the store timeout (in milliseconds)
    pub fn store_timeout_ms(mut self, ms: u64) -> Self {
        self.config.store_timeout_ms = ms;
        self
    }

    /// Set the evict timeout (in milliseconds)
    pub fn evict_timeout_ms(mut self, ms: u64) -> Self {
        self.config.evict_timeout_ms = ms;
        self
    }

    /// Set the same timeout for all three operations
    pub fn timeout_ms(self, ms: u64) -> Self {
        self.fetch_timeout_ms(ms)
            .store_timeout_ms(ms)
            .evict_timeout_ms(ms)
    }

    /// Validate and produce the config
    ///
    /// Trailing slashes are stripped from the base URL so that endpoint
    /// paths can be appended directly.
    pub fn build(mut self) -> Result<Config> {
        self.config.normalize();
        let url = &self.config.base_url;
        if url.is_empty() {
            return Err(CacheError::Config("base URL is empty".to_string()));
        }
        reqwest::Url::parse(url)
            .map_err(|e| CacheError::Config(format!("invalid base URL {:?}: {}", url, e)))?;

        Ok(self.config)
    }
}
