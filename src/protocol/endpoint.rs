//! Endpoint definitions
//!
//! One fixed path per operation kind.

use std::fmt;

/// Remote operation kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Fetch,
    Store,
    Evict,
}

impl Endpoint {
    /// Path suffix appended to the base URL
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Fetch => "/api/v1/cache/get_all",
            Endpoint::Store => "/api/v1/cache/put_all",
            Endpoint::Evict => "/api/v1/cache/evict_all",
        }
    }

    /// Whether the response body carries data worth decoding
    pub fn has_response_body(&self) -> bool {
        matches!(self, Endpoint::Fetch)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Endpoint::Fetch => "fetch",
            Endpoint::Store => "store",
            Endpoint::Evict => "evict",
        };
        f.write_str(name)
    }
}
