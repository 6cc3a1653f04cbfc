// file: src/client/mock.rs
// description: in-memory page fetcher for pipeline tests
// reference: canned responses keyed by word with optional delays

use crate::client::{PageFetcher, RawResponse};
use crate::error::TransportError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Debug, Clone)]
enum MockReply {
    Page { status: u16, body: Vec<u8> },
    Unreachable,
}

/// Serves canned pages keyed by the last path segment of the requested URL.
/// Unknown words get a 404.
#[derive(Debug, Default)]
pub struct MockFetcher {
    replies: HashMap<String, (MockReply, u64)>,
    calls: Arc<AtomicUsize>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, word: &str, html: &str) -> Self {
        self.with_delayed_page(word, html, 0)
    }

    pub fn with_delayed_page(mut self, word: &str, html: &str, delay_ms: u64) -> Self {
        let reply = MockReply::Page {
            status: 200,
            body: html.as_bytes().to_vec(),
        };
        self.replies.insert(word.to_string(), (reply, delay_ms));
        self
    }

    pub fn with_status(mut self, word: &str, status: u16) -> Self {
        let reply = MockReply::Page {
            status,
            body: Vec::new(),
        };
        self.replies.insert(word.to_string(), (reply, 0));
        self
    }

    pub fn with_body(mut self, word: &str, body: Vec<u8>) -> Self {
        self.replies
            .insert(word.to_string(), (MockReply::Page { status: 200, body }, 0));
        self
    }

    pub fn with_unreachable(mut self, word: &str) -> Self {
        self.replies
            .insert(word.to_string(), (MockReply::Unreachable, 0));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn get(&self, url: &str) -> Result<RawResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let word = url.rsplit('/').next().unwrap_or_default();
        let Some((reply, delay_ms)) = self.replies.get(word) else {
            return Ok(RawResponse {
                status: 404,
                body: Vec::new(),
            });
        };

        if *delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(*delay_ms)).await;
        }

        match reply {
            MockReply::Page { status, body } => Ok(RawResponse {
                status: *status,
                body: body.clone(),
            }),
            MockReply::Unreachable => Err(TransportError("connection refused".to_string())),
        }
    }
}
