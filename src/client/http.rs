// file: src/client/http.rs
// description: reqwest-backed page fetcher with a fixed user agent
// reference: https://docs.rs/reqwest

use crate::client::{PageFetcher, RawResponse};
use crate::config::LookupConfig;
use crate::error::{LookupError, Result, TransportError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &LookupConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());

        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| LookupError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn get(&self, url: &str) -> std::result::Result<RawResponse, TransportError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError(format!("Failed to read response body: {}", e)))?;

        debug!("{} returned {} ({} bytes)", url, status, body.len());
        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }
}
