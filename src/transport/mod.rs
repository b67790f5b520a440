//! Transport Module
//!
//! Turns an encoded batch into one HTTP exchange with the cache service.
//!
//! ## Per-call pipeline
//! - URL = base URL + endpoint path
//! - gzip the body when it reaches the configured threshold
//! - POST under the endpoint's deadline (connect, send and full body read)
//! - 200 / 204 are success, anything else is a remote error
//!
//! Each call is a single attempt. Retries belong to the caller.

mod compression;
mod driver;

pub use compression::{gzip, should_compress};
pub use driver::Transport;
