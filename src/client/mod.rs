// file: src/client/mod.rs
// description: page fetching seam between the lookup pipeline and the network
// reference: internal module structure

pub mod http;
#[cfg(test)]
pub mod mock;

use crate::error::TransportError;
use async_trait::async_trait;

pub use http::HttpFetcher;

#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Performs GET requests for the lookup pipeline. Implementations are shared
/// by all concurrent lookups.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Only connection-level failures are errors, every HTTP status is
    /// returned as a response.
    async fn get(&self, url: &str) -> std::result::Result<RawResponse, TransportError>;
}
