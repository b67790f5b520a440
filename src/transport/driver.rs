//! Transport driver
//!
//! Executes one POST per call through the injected HTTP client.

use std::sync::Arc;
use std::time::Instant;

use bytes::Bytes;
use reqwest::header::{CONTENT_ENCODING, CONTENT_TYPE};
use reqwest::StatusCode;

use super::compression::{gzip, should_compress};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::protocol::Endpoint;

/// Sends encoded batches to the cache service
///
/// Holds no per-call state. Cloning shares the connection pool of the
/// underlying HTTP client and the configuration.
#[derive(Debug, Clone)]
pub struct Transport {
    /// Injected HTTP client (pooling, TLS)
    http: reqwest::Client,

    /// Shared, immutable configuration
    config: Arc<Config>,
}

impl Transport {
    /// Create a transport over an existing HTTP client
    pub fn new(http: reqwest::Client, config: Arc<Config>) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Send `payload` to `endpoint` and classify the response
    ///
    /// Returns the response body for endpoints that carry one, and an empty
    /// buffer otherwise. The whole exchange, body included, runs under the
    /// endpoint's timeout. If the deadline fires the in-flight request and
    /// any partially read response are dropped.
    ///
    /// A timeout raised by the injected HTTP client itself is reported as
    /// `Timeout` too, carrying the time spent before it fired.
    pub async fn send(&self, endpoint: Endpoint, payload: Vec<u8>) -> Result<Bytes> {
        let timeout = self.config.timeout_for(endpoint);
        let started = Instant::now();

        match tokio::time::timeout(timeout, self.exchange(endpoint, payload)).await {
            Ok(Err(CacheError::Transport(e))) if e.is_timeout() => {
                let elapsed = started.elapsed();
                tracing::warn!("{} request timed out in HTTP client after {:?}", endpoint, elapsed);
                Err(CacheError::Timeout {
                    endpoint,
                    timeout: elapsed,
                })
            }
            Ok(result) => result,
            Err(_) => {
                tracing::warn!("{} request exceeded deadline of {:?}", endpoint, timeout);
                Err(CacheError::Timeout { endpoint, timeout })
            }
        }
    }

    /// One request/response round trip, without a deadline
    async fn exchange(&self, endpoint: Endpoint, payload: Vec<u8>) -> Result<Bytes> {
        let url = self.config.url_for(endpoint);
        let raw_len = payload.len();
        let compressed = should_compress(raw_len, self.config.gzip_threshold);

        let body = if compressed { gzip(&payload)? } else { payload };

        tracing::debug!(
            endpoint = %endpoint,
            url = %url,
            raw_bytes = raw_len,
            sent_bytes = body.len(),
            compressed,
            "Sending cache request"
        );

        // A Vec body has an exact size, so Content-Length is always set
        let mut request = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json");
        if compressed {
            request = request.header(CONTENT_ENCODING, "gzip");
        }

        let response = request.body(body).send().await?;
        let status = response.status();

        if status != StatusCode::OK && status != StatusCode::NO_CONTENT {
            // Read the body eagerly so the connection goes back to the pool
            let text = match response.text().await {
                Ok(text) => text,
                Err(e) => {
                    tracing::debug!("{} error body unreadable: {}", endpoint, e);
                    String::new()
                }
            };
            tracing::warn!("{} request failed with status {}", endpoint, status.as_u16());
            return Err(CacheError::Remote {
                status: status.as_u16(),
                body: text.trim().to_string(),
            });
        }

        let bytes = response.bytes().await?;
        tracing::trace!("{} response: status {}, {} bytes", endpoint, status.as_u16(), bytes.len());

        if endpoint.has_response_body() {
            Ok(bytes)
        } else {
            Ok(Bytes::new())
        }
    }
}
