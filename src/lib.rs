//! # tiercache
//!
//! Client library for a remote, named multi-level cache service:
//! - Batched fetch / store / evict over HTTP
//! - Typed values through serde
//! - Size-threshold gzip for request bodies
//! - Independent per-operation timeouts
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         Client                               │
//! │                 fetch / store / evict                        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    Protocol Codec                            │
//! │        [{"c","k"}]  [{"c","k","v"}]  [{"c","k","v","f"}]     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      Transport                               │
//! │         gzip? → POST → deadline → status check               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!                       ▼
//!               reqwest::Client (injected)
//! ```
//!
//! ## Example
//!
//! ```no_run
//! # async fn run() -> tiercache::Result<()> {
//! use tiercache::{CacheEntry, CacheIdentifier, Client};
//!
//! let client = Client::new("http://cache.internal:8080/")?;
//! client.store(&[CacheEntry::new("users", "1", "Alice")]).await?;
//!
//! let hits = client
//!     .fetch::<String>(&[CacheIdentifier::new("users", "1")])
//!     .await?;
//! assert!(hits[0].is_found());
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod transport;
pub mod client;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{CacheError, Result};
pub use config::Config;
pub use client::Client;
pub use protocol::{CacheEntry, CacheEntryResult, CacheIdentifier, Endpoint};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of tiercache
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
