//! Error types for tiercache
//!
//! Every client operation fails as a unit with one of these.

use std::time::Duration;

use thiserror::Error;

use crate::protocol::Endpoint;

/// Result type alias using CacheError
pub type Result<T> = std::result::Result<T, CacheError>;

/// Unified error type for cache client operations
#[derive(Debug, Error)]
pub enum CacheError {
    // -------------------------------------------------------------------------
    // Codec Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Compression error: {0}")]
    Compression(#[source] std::io::Error),

    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    #[error("{endpoint} timed out after {timeout:?}")]
    Timeout { endpoint: Endpoint, timeout: Duration },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    // -------------------------------------------------------------------------
    // Remote Errors
    // -------------------------------------------------------------------------
    #[error("unexpected response code {status}: {body}")]
    Remote { status: u16, body: String },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CacheError {
    /// True when the deadline for the call elapsed
    pub fn is_timeout(&self) -> bool {
        matches!(self, CacheError::Timeout { .. })
    }

    /// HTTP status code for remote errors
    pub fn status(&self) -> Option<u16> {
        match self {
            CacheError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}
